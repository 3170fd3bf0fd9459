//! Text source command handlers.

use serde_json::json;

use obsws_core::{InputSettings, Remote};

use crate::cli::{TextArgs, TextCommand};
use crate::error::CliError;

use super::{Context, util};

/// Settings of `input`, which must exist and be a text source.
async fn text_input(remote: &impl Remote, input: &str) -> Result<InputSettings, CliError> {
    util::require_input(remote, input).await?;
    let settings = remote.input_settings(input).await?;
    if !settings.is_text() {
        return Err(CliError::invalid_parameter(format!(
            "Input {input} is not a text input."
        )));
    }
    Ok(settings)
}

pub async fn handle(
    remote: &impl Remote,
    args: TextArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        TextCommand::Current { input } => {
            let settings = text_input(remote, &input).await?;
            Ok(format!(
                "Current text for input {}: {}",
                ctx.hl(&input),
                util::or_empty(settings.text())
            ))
        }

        TextCommand::Update { input, text } => {
            text_input(remote, &input).await?;
            let text = text.unwrap_or_default();
            remote
                .set_input_settings(&input, &json!({ "text": text }))
                .await?;
            Ok(format!(
                "Text for input {} updated to: {}",
                ctx.hl(&input),
                util::or_empty(&text)
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use obsws_core::testing::FakeObs;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::exit_code;

    fn obs() -> FakeObs {
        FakeObs::new()
            .with_input("Title", "text_ft2_source_v2", None)
            .with_input_settings("Title", json!({ "text": "Live soon", "font": { "size": 48 } }))
            .with_input("Caption", "text_gdiplus_v3", None)
            .with_input("Mic", "pulse_input_capture", Some(false))
    }

    async fn run(obs: &FakeObs, command: TextCommand) -> Result<String, CliError> {
        handle(obs, TextArgs { command }, &Context::default()).await
    }

    #[tokio::test]
    async fn current_text() {
        let obs = obs();
        assert_eq!(
            run(&obs, TextCommand::Current { input: "Title".into() })
                .await
                .unwrap(),
            "Current text for input Title: Live soon"
        );
        assert_eq!(
            run(&obs, TextCommand::Current { input: "Caption".into() })
                .await
                .unwrap(),
            "Current text for input Caption: (empty)"
        );
    }

    #[tokio::test]
    async fn update_overlays_text_only() {
        let obs = obs();
        let out = run(
            &obs,
            TextCommand::Update {
                input: "Title".into(),
                text: Some("We are live".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(out, "Text for input Title updated to: We are live");
        assert_eq!(obs.input_text("Title").as_deref(), Some("We are live"));
        assert_eq!(
            obs.mutations(),
            vec![r#"set_input_settings(Title, {"text":"We are live"})"#]
        );
    }

    #[tokio::test]
    async fn update_without_text_clears() {
        let obs = obs();
        let out = run(
            &obs,
            TextCommand::Update {
                input: "Title".into(),
                text: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(out, "Text for input Title updated to: (empty)");
        assert_eq!(obs.input_text("Title").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn rejects_missing_and_non_text_inputs() {
        let obs = obs();
        let err = run(&obs, TextCommand::Current { input: "Ghost".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Input Ghost not found.");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);

        let err = run(
            &obs,
            TextCommand::Update {
                input: "Mic".into(),
                text: Some("x".into()),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Input Mic is not a text input.");
        assert_eq!(err.exit_code(), exit_code::INVALID_PARAMETER);
        assert!(obs.mutations().is_empty());
    }
}
