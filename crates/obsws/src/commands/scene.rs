//! Scene command handlers.

use tabled::Tabled;

use obsws_core::{Remote, Scene};

use crate::cli::{SceneArgs, SceneCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct SceneRow {
    #[tabled(rename = "Scene Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

#[derive(Tabled)]
struct SceneUuidRow {
    #[tabled(rename = "Scene Name")]
    name: String,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "UUID")]
    uuid: String,
}

fn is_active(scene: &Scene, program: Option<&str>) -> &'static str {
    output::check_mark(program == Some(scene.name.as_str()), true)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: SceneArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        SceneCommand::List { uuid } => {
            let list = remote.scenes().await?;
            let program = list.current_program.as_deref();
            // OBS reports the bottom of the scene dock first.
            let scenes = list.scenes.iter().rev();

            if uuid {
                let rows: Vec<SceneUuidRow> = scenes
                    .map(|s| SceneUuidRow {
                        name: s.name.clone(),
                        active: is_active(s, program),
                        uuid: s.uuid.clone(),
                    })
                    .collect();
                Ok(output::render_table("Scenes", &rows, &ctx.style))
            } else {
                let rows: Vec<SceneRow> = scenes
                    .map(|s| SceneRow {
                        name: s.name.clone(),
                        active: is_active(s, program),
                    })
                    .collect();
                Ok(output::render_table("Scenes", &rows, &ctx.style))
            }
        }

        SceneCommand::Current { preview } => {
            if preview {
                if !remote.studio_mode_enabled().await? {
                    return Err(CliError::precondition(
                        "Studio mode is not enabled, cannot get preview scene.",
                    ));
                }
                let scene = remote.current_preview_scene().await?;
                Ok(format!("Current Preview Scene: {}", ctx.hl(&scene)))
            } else {
                let scene = remote.current_program_scene().await?;
                Ok(format!("Current Program Scene: {}", ctx.hl(&scene)))
            }
        }

        SceneCommand::Switch { scene, preview } => {
            if preview && !remote.studio_mode_enabled().await? {
                return Err(CliError::precondition(
                    "Studio mode is not enabled, cannot switch to preview scene.",
                ));
            }
            util::require_scene(remote, &scene).await?;

            if preview {
                remote.set_current_preview_scene(&scene).await?;
                Ok(format!("Switched to preview scene: {}", ctx.hl(&scene)))
            } else {
                remote.set_current_program_scene(&scene).await?;
                Ok(format!("Switched to program scene: {}", ctx.hl(&scene)))
            }
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

    fn obs() -> FakeObs {
        FakeObs::new().with_scenes(&["Intro", "Main", "Outro"], "Main")
    }

    async fn run(obs: &FakeObs, command: SceneCommand) -> Result<String, CliError> {
        handle(obs, SceneArgs { command }, &Context::default()).await
    }

    fn data_lines(table: &str) -> Vec<&str> {
        table
            .lines()
            .filter(|l| ["Intro", "Main", "Outro"].iter().any(|n| l.contains(n)))
            .collect()
    }

    #[tokio::test]
    async fn list_reverses_reported_order_and_marks_program() {
        let out = run(&obs(), SceneCommand::List { uuid: false }).await.unwrap();
        let lines = data_lines(&out);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Outro"));
        assert!(lines[1].contains("Main") && lines[1].contains('✓'));
        assert!(lines[2].contains("Intro") && !lines[2].contains('✓'));
        assert!(!out.contains("UUID"));
    }

    #[tokio::test]
    async fn list_with_uuid_adds_column() {
        let out = run(&obs(), SceneCommand::List { uuid: true }).await.unwrap();
        assert!(out.contains("UUID"));
        assert!(out.contains("00000000-0000-4000-8000-000000000001"));
    }

    #[tokio::test]
    async fn switch_issues_exactly_one_mutation() {
        let obs = obs();
        let out = run(
            &obs,
            SceneCommand::Switch {
                scene: "Outro".into(),
                preview: false,
            },
        )
        .await
        .unwrap();
        assert_eq!(out, "Switched to program scene: Outro");
        assert_eq!(obs.mutations(), vec!["set_current_program_scene(Outro)"]);
        assert_eq!(obs.program_scene(), "Outro");
    }

    #[tokio::test]
    async fn switch_to_unknown_scene_fails_before_mutating() {
        let obs = obs();
        let err = run(
            &obs,
            SceneCommand::Switch {
                scene: "outro".into(),
                preview: false,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Scene outro not found.");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(obs.mutations().is_empty());
    }

    #[tokio::test]
    async fn preview_requires_studio_mode() {
        let obs = obs();
        let err = run(&obs, SceneCommand::Current { preview: true })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Studio mode is not enabled, cannot get preview scene."
        );

        let err = run(
            &obs,
            SceneCommand::Switch {
                scene: "Intro".into(),
                preview: true,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.exit_code(), exit_code::ERROR);
        assert!(obs.mutations().is_empty());
    }

    #[tokio::test]
    async fn preview_scene_in_studio_mode() {
        let obs = obs().with_studio_mode("Intro");
        let out = run(&obs, SceneCommand::Current { preview: true })
            .await
            .unwrap();
        assert_eq!(out, "Current Preview Scene: Intro");

        run(
            &obs,
            SceneCommand::Switch {
                scene: "Outro".into(),
                preview: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(obs.preview_scene().as_deref(), Some("Outro"));
        assert_eq!(obs.program_scene(), "Main");
    }
}
