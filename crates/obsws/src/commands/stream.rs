//! Streaming command handlers.

use std::time::Duration;

use obsws_core::Remote;

use crate::cli::{StreamArgs, StreamCommand};
use crate::error::CliError;

use super::Context;

fn started_or_stopped(active: bool) -> String {
    if active {
        "Streaming started successfully.".into()
    } else {
        "Streaming stopped successfully.".into()
    }
}

fn in_progress_for(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!(
            "Streaming is in progress for {} minutes and {} seconds.",
            secs / 60,
            secs % 60
        )
    } else if secs >= 1 {
        format!("Streaming is in progress for {secs} seconds.")
    } else if !duration.is_zero() {
        "Streaming is in progress for less than a second.".into()
    } else {
        "Streaming is in progress.".into()
    }
}

pub async fn handle(
    remote: &impl Remote,
    args: StreamArgs,
    _ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        StreamCommand::Start => {
            if remote.stream_status().await?.active {
                return Err(CliError::precondition(
                    "Streaming is already in progress, cannot start.",
                ));
            }
            remote.start_stream().await?;
            Ok(started_or_stopped(true))
        }

        StreamCommand::Stop => {
            if !remote.stream_status().await?.active {
                return Err(CliError::precondition(
                    "Streaming is not in progress, cannot stop.",
                ));
            }
            remote.stop_stream().await?;
            Ok(started_or_stopped(false))
        }

        StreamCommand::Toggle => Ok(started_or_stopped(remote.toggle_stream().await?)),

        StreamCommand::Status => {
            let status = remote.stream_status().await?;
            if status.active {
                Ok(in_progress_for(status.duration))
            } else {
                Ok("Streaming is not in progress.".into())
            }
        }
    }
}
