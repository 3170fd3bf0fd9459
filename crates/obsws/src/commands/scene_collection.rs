//! Scene collection command handlers.

use tabled::Tabled;

use obsws_core::{Remote, validate};

use crate::cli::{SceneCollectionArgs, SceneCollectionCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SceneCollectionRow {
    #[tabled(rename = "Scene Collection Name")]
    name: String,
    #[tabled(rename = "Current")]
    current: &'static str,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: SceneCollectionArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        SceneCollectionCommand::List => {
            let collections = remote.scene_collections().await?;
            let rows: Vec<SceneCollectionRow> = collections
                .names
                .iter()
                .map(|name| SceneCollectionRow {
                    name: name.clone(),
                    current: output::check_mark(collections.is_current(name), true),
                })
                .collect();
            Ok(output::render_table("Scene Collections", &rows, &ctx.style))
        }

        SceneCollectionCommand::Current => {
            let collections = remote.scene_collections().await?;
            Ok(format!(
                "Current scene collection: {}",
                ctx.hl(&collections.current)
            ))
        }

        SceneCollectionCommand::Switch { name } => {
            let collections = remote.scene_collections().await?;
            if !collections.contains(&name) {
                return Err(CliError::not_found(format!(
                    "Scene collection {name} not found."
                )));
            }
            if collections.is_current(&name) {
                return Err(CliError::precondition(format!(
                    "Scene collection {name} is already active."
                )));
            }
            remote.set_current_scene_collection(&name).await?;
            Ok(format!("Switched to scene collection {}.", ctx.hl(&name)))
        }

        SceneCollectionCommand::Create { name } => {
            if validate::scene_collection_exists(remote, &name).await? {
                return Err(CliError::already_exists(format!(
                    "Scene collection {name} already exists."
                )));
            }
            remote.create_scene_collection(&name).await?;
            Ok(format!("Created scene collection {}.", ctx.hl(&name)))
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
        FakeObs::new().with_scene_collections(&["Untitled", "Podcast"], "Untitled")
    }

    async fn run(obs: &FakeObs, command: SceneCollectionCommand) -> Result<String, CliError> {
        handle(obs, SceneCollectionArgs { command }, &Context::default()).await
    }

    #[tokio::test]
    async fn list_marks_current() {
        let out = run(&obs(), SceneCollectionCommand::List).await.unwrap();
        assert!(out.contains("Scene Collections"));
        let untitled = out.lines().find(|l| l.contains("Untitled")).unwrap();
        let podcast = out.lines().find(|l| l.contains("Podcast")).unwrap();
        assert!(untitled.contains('✓'));
        assert!(!podcast.contains('✓'));
    }

    #[tokio::test]
    async fn switch_guards() {
        let obs = obs();
        let err = run(&obs, SceneCollectionCommand::Switch { name: "Gaming".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Scene collection Gaming not found.");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);

        let err = run(&obs, SceneCollectionCommand::Switch { name: "Untitled".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Scene collection Untitled is already active.");
        assert!(obs.mutations().is_empty());

        let out = run(&obs, SceneCollectionCommand::Switch { name: "Podcast".into() })
            .await
            .unwrap();
        assert_eq!(out, "Switched to scene collection Podcast.");
        assert_eq!(obs.current_scene_collection(), "Podcast");
    }

    #[tokio::test]
    async fn create_rejects_duplicates() {
        let obs = obs();
        let err = run(&obs, SceneCollectionCommand::Create { name: "Podcast".into() })
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), exit_code::ALREADY_EXISTS);
        assert!(obs.mutations().is_empty());

        let out = run(&obs, SceneCollectionCommand::Create { name: "Gaming".into() })
            .await
            .unwrap();
        assert_eq!(out, "Created scene collection Gaming.");
        assert_eq!(obs.mutations(), vec!["create_scene_collection(Gaming)"]);
    }
}
