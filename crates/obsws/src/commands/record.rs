//! Recording command handlers.

use obsws_core::{RecordStatus, Remote};

use crate::cli::{RecordArgs, RecordCommand};
use crate::error::CliError;

use super::Context;

/// Fail unless recording is running and not paused.
fn require_running(status: RecordStatus, action: &str) -> Result<(), CliError> {
    if !status.active {
        return Err(CliError::precondition(format!(
            "Recording is not in progress, cannot {action}."
        )));
    }
    if status.paused {
        return Err(CliError::precondition(format!(
            "Recording is paused, cannot {action}."
        )));
    }
    Ok(())
}

pub async fn handle(
    remote: &impl Remote,
    args: RecordArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        RecordCommand::Start => {
            let status = remote.record_status().await?;
            if status.active {
                let mut message = String::from("Recording is already in progress, cannot start.");
                if status.paused {
                    message.push_str(" Try resuming it.");
                }
                return Err(CliError::precondition(message));
            }
            remote.start_record().await?;
            Ok("Recording started successfully.".into())
        }

        RecordCommand::Stop => {
            if !remote.record_status().await?.active {
                return Err(CliError::precondition(
                    "Recording is not in progress, cannot stop.",
                ));
            }
            let path = remote.stop_record().await?;
            Ok(format!(
                "Recording stopped successfully. Saved to: {}",
                ctx.hl(&path)
            ))
        }

        RecordCommand::Toggle => {
            if remote.toggle_record().await? {
                Ok("Recording started successfully.".into())
            } else {
                Ok("Recording stopped successfully.".into())
            }
        }

        RecordCommand::Status => {
            let status = remote.record_status().await?;
            Ok(match (status.active, status.paused) {
                (true, true) => "Recording is in progress and paused.",
                (true, false) => "Recording is in progress.",
                (false, _) => "Recording is not in progress.",
            }
            .into())
        }

        RecordCommand::Resume => {
            let status = remote.record_status().await?;
            if !status.active {
                return Err(CliError::precondition(
                    "Recording is not in progress, cannot resume.",
                ));
            }
            if !status.paused {
                return Err(CliError::precondition(
                    "Recording is in progress but not paused, cannot resume.",
                ));
            }
            remote.resume_record().await?;
            Ok("Recording resumed successfully.".into())
        }

        RecordCommand::Pause => {
            let status = remote.record_status().await?;
            if !status.active {
                return Err(CliError::precondition(
                    "Recording is not in progress, cannot pause.",
                ));
            }
            if status.paused {
                return Err(CliError::precondition(
                    "Recording is in progress but already paused, cannot pause.",
                ));
            }
            remote.pause_record().await?;
            Ok("Recording paused successfully.".into())
        }

        RecordCommand::Directory { directory } => match directory {
            Some(directory) => {
                remote.set_record_directory(&directory).await?;
                Ok(format!(
                    "Recording directory updated to: {}",
                    ctx.hl(&directory)
                ))
            }
            None => {
                let directory = remote.record_directory().await?;
                Ok(format!("Recording directory: {}", ctx.hl(&directory)))
            }
        },

        RecordCommand::Split => {
            require_running(remote.record_status().await?, "split")?;
            remote.split_record_file().await?;
            Ok("Recording split successfully.".into())
        }

        RecordCommand::Chapter { name } => {
            require_running(remote.record_status().await?, "create chapter")?;
            remote.create_record_chapter(name.as_deref()).await?;
            Ok(format!(
                "Chapter {} created successfully.",
                ctx.hl(name.as_deref().unwrap_or("unnamed"))
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use obsws_core::testing::FakeObs;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::exit_code;

    async fn run(obs: &FakeObs, command: RecordCommand) -> Result<String, CliError> {
        handle(obs, RecordArgs { command }, &Context::default()).await
    }

    async fn err(obs: &FakeObs, command: RecordCommand) -> String {
        let err = run(obs, command).await.unwrap_err();
        assert_eq!(err.exit_code(), exit_code::ERROR);
        err.to_string()
    }

    #[tokio::test]
    async fn start_when_active_never_mutates() {
        let obs = FakeObs::new().with_recording(true, false);
        assert_eq!(
            err(&obs, RecordCommand::Start).await,
            "Recording is already in progress, cannot start."
        );

        let obs = FakeObs::new().with_recording(true, true);
        assert_eq!(
            err(&obs, RecordCommand::Start).await,
            "Recording is already in progress, cannot start. Try resuming it."
        );
        assert!(obs.mutations().is_empty());
    }

    #[tokio::test]
    async fn stop_reports_output_path() {
        let obs = FakeObs::new()
            .with_recording(true, false)
            .with_record_directory("/home/obs/Videos");
        assert_eq!(
            run(&obs, RecordCommand::Stop).await.unwrap(),
            "Recording stopped successfully. Saved to: /home/obs/Videos/recording.mkv"
        );

        assert_eq!(
            err(&obs, RecordCommand::Stop).await,
            "Recording is not in progress, cannot stop."
        );
        assert_eq!(obs.mutations(), vec!["stop_record"]);
    }

    #[tokio::test]
    async fn pause_and_resume_guards() {
        let obs = FakeObs::new();
        assert_eq!(
            err(&obs, RecordCommand::Pause).await,
            "Recording is not in progress, cannot pause."
        );
        assert_eq!(
            err(&obs, RecordCommand::Resume).await,
            "Recording is not in progress, cannot resume."
        );

        let obs = FakeObs::new().with_recording(true, false);
        assert_eq!(
            err(&obs, RecordCommand::Resume).await,
            "Recording is in progress but not paused, cannot resume."
        );
        assert_eq!(
            run(&obs, RecordCommand::Pause).await.unwrap(),
            "Recording paused successfully."
        );
        assert_eq!(
            err(&obs, RecordCommand::Pause).await,
            "Recording is in progress but already paused, cannot pause."
        );
        assert_eq!(
            run(&obs, RecordCommand::Status).await.unwrap(),
            "Recording is in progress and paused."
        );
        assert_eq!(
            run(&obs, RecordCommand::Resume).await.unwrap(),
            "Recording resumed successfully."
        );
        assert_eq!(obs.mutations(), vec!["pause_record", "resume_record"]);
    }

    #[tokio::test]
    async fn toggle_twice_restores_state() {
        let obs = FakeObs::new();
        assert_eq!(
            run(&obs, RecordCommand::Toggle).await.unwrap(),
            "Recording started successfully."
        );
        assert_eq!(
            run(&obs, RecordCommand::Toggle).await.unwrap(),
            "Recording stopped successfully."
        );
        assert!(!obs.recording().active);
        assert_eq!(
            run(&obs, RecordCommand::Status).await.unwrap(),
            "Recording is not in progress."
        );
    }

    #[tokio::test]
    async fn split_and_chapter_need_an_unpaused_recording() {
        let obs = FakeObs::new().with_recording(true, true);
        assert_eq!(
            err(&obs, RecordCommand::Split).await,
            "Recording is paused, cannot split."
        );
        assert_eq!(
            err(&obs, RecordCommand::Chapter { name: None }).await,
            "Recording is paused, cannot create chapter."
        );

        let obs = FakeObs::new().with_recording(true, false);
        assert_eq!(
            run(&obs, RecordCommand::Split).await.unwrap(),
            "Recording split successfully."
        );
        assert_eq!(
            run(&obs, RecordCommand::Chapter { name: None }).await.unwrap(),
            "Chapter unnamed created successfully."
        );
        assert_eq!(
            run(
                &obs,
                RecordCommand::Chapter {
                    name: Some("Q&A".into())
                }
            )
            .await
            .unwrap(),
            "Chapter Q&A created successfully."
        );
    }

    #[tokio::test]
    async fn directory_get_and_set() {
        let obs = FakeObs::new().with_record_directory("/videos");
        assert_eq!(
            run(&obs, RecordCommand::Directory { directory: None })
                .await
                .unwrap(),
            "Recording directory: /videos"
        );
        assert_eq!(
            run(
                &obs,
                RecordCommand::Directory {
                    directory: Some("/mnt/rec".into())
                }
            )
            .await
            .unwrap(),
            "Recording directory updated to: /mnt/rec"
        );
        assert_eq!(obs.mutations(), vec!["set_record_directory(/mnt/rec)"]);
    }
}
