//! Shared helpers for command handlers.

use obsws_core::{Remote, validate};

use crate::error::CliError;

/// `scene` if given, else the current program scene.
pub async fn scene_or_current(
    remote: &impl Remote,
    scene: Option<String>,
) -> Result<String, CliError> {
    match scene {
        Some(scene) => Ok(scene),
        None => Ok(remote.current_program_scene().await?),
    }
}

/// Fail with "Scene X not found." unless the scene exists.
pub async fn require_scene(remote: &impl Remote, scene: &str) -> Result<(), CliError> {
    if validate::scene_exists(remote, scene).await? {
        Ok(())
    } else {
        Err(CliError::not_found(format!("Scene {scene} not found.")))
    }
}

/// Fail with "Input X not found." unless the input exists.
pub async fn require_input(remote: &impl Remote, input: &str) -> Result<(), CliError> {
    if validate::input_exists(remote, input).await? {
        Ok(())
    } else {
        Err(CliError::not_found(format!("Input {input} not found.")))
    }
}

/// `(empty)` stands in for blank text so the sentence still reads.
pub fn or_empty(text: &str) -> &str {
    if text.is_empty() { "(empty)" } else { text }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use obsws_core::testing::FakeObs;

    use super::*;

    #[tokio::test]
    async fn missing_scene_is_not_found() {
        let obs = FakeObs::new().with_scenes(&["Main"], "Main");
        require_scene(&obs, "Main").await.unwrap();
        let err = require_scene(&obs, "main").await.unwrap_err();
        assert_eq!(err.to_string(), "Scene main not found.");
    }

    #[tokio::test]
    async fn scene_defaults_to_program() {
        let obs = FakeObs::new().with_scenes(&["Intro", "Main"], "Intro");
        assert_eq!(scene_or_current(&obs, None).await.unwrap(), "Intro");
        assert_eq!(
            scene_or_current(&obs, Some("Main".into())).await.unwrap(),
            "Main"
        );
    }

    #[test]
    fn blank_text_reads_as_empty() {
        assert_eq!(or_empty(""), "(empty)");
        assert_eq!(or_empty("Live"), "Live");
    }
}
