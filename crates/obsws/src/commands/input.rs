//! Input command handlers.

use tabled::Tabled;

use obsws_core::{CoreError, Input, Remote};

use crate::cli::{InputArgs, InputCommand, InputKindFilter};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct InputRow {
    #[tabled(rename = "Input Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Muted")]
    muted: &'static str,
}

#[derive(Tabled)]
struct InputUuidRow {
    #[tabled(rename = "Input Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Muted")]
    muted: &'static str,
    #[tabled(rename = "UUID")]
    uuid: String,
}

// ── Kind filtering ──────────────────────────────────────────────────

impl InputKindFilter {
    /// Kind substrings selected by the flags; empty means every kind.
    fn needles(&self) -> Vec<&'static str> {
        [
            (self.input, "input"),
            (self.output, "output"),
            (self.colour, "color"),
            (self.ffmpeg, "ffmpeg"),
            (self.vlc, "vlc"),
        ]
        .into_iter()
        .filter_map(|(on, needle)| on.then_some(needle))
        .collect()
    }

    fn matches(&self, kind: &str) -> bool {
        let needles = self.needles();
        needles.is_empty() || needles.iter().any(|n| kind.contains(n))
    }
}

/// Mute state cell. Inputs without audio report `N/A`.
async fn muted_cell(remote: &impl Remote, input: &Input) -> Result<&'static str, CliError> {
    match remote.input_muted(&input.name).await {
        Ok(muted) => Ok(output::check_mark(muted, false)),
        Err(CoreError::InvalidResourceState { .. }) => Ok("N/A"),
        Err(err) => Err(err.into()),
    }
}

async fn set_muted(
    remote: &impl Remote,
    name: &str,
    muted: Option<bool>,
    ctx: &Context,
) -> Result<String, CliError> {
    util::require_input(remote, name).await?;
    let muted = match muted {
        Some(muted) => muted,
        None => !remote.input_muted(name).await?,
    };
    remote.set_input_muted(name, muted).await?;
    let state = if muted { "muted" } else { "unmuted" };
    Ok(format!("Input {} {state}.", ctx.hl(name)))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: InputArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        InputCommand::List { kinds, uuid } => {
            let mut inputs: Vec<Input> = remote
                .inputs()
                .await?
                .into_iter()
                .filter(|i| kinds.matches(&i.kind))
                .collect();
            if inputs.is_empty() {
                return Ok("No inputs found.".into());
            }
            inputs.sort_by(|a, b| a.name.cmp(&b.name));

            if uuid {
                let mut rows = Vec::with_capacity(inputs.len());
                for input in &inputs {
                    rows.push(InputUuidRow {
                        name: input.name.clone(),
                        kind: output::snake_to_title(&input.kind),
                        muted: muted_cell(remote, input).await?,
                        uuid: input.uuid.clone(),
                    });
                }
                Ok(output::render_table("Inputs", &rows, &ctx.style))
            } else {
                let mut rows = Vec::with_capacity(inputs.len());
                for input in &inputs {
                    rows.push(InputRow {
                        name: input.name.clone(),
                        kind: output::snake_to_title(&input.kind),
                        muted: muted_cell(remote, input).await?,
                    });
                }
                Ok(output::render_table("Inputs", &rows, &ctx.style))
            }
        }

        InputCommand::Mute { name } => set_muted(remote, &name, Some(true), ctx).await,
        InputCommand::Unmute { name } => set_muted(remote, &name, Some(false), ctx).await,
        InputCommand::Toggle { name } => set_muted(remote, &name, None, ctx).await,
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
        FakeObs::new()
            .with_input("Mic/Aux", "wasapi_input_capture", Some(false))
            .with_input("Desktop Audio", "wasapi_output_capture", Some(true))
            .with_input("Background", "color_source_v3", None)
            .with_input("Clip", "ffmpeg_source", Some(false))
    }

    async fn run(obs: &FakeObs, command: InputCommand) -> Result<String, CliError> {
        handle(obs, InputArgs { command }, &Context::default()).await
    }

    fn list(kinds: InputKindFilter) -> InputCommand {
        InputCommand::List { kinds, uuid: false }
    }

    #[tokio::test]
    async fn list_sorts_by_name_and_marks_audio_less_inputs() {
        let out = run(&obs(), list(InputKindFilter::default())).await.unwrap();
        let names = ["Background", "Clip", "Desktop Audio", "Mic/Aux"];
        let positions: Vec<usize> = names.iter().map(|n| out.find(n).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");

        let background = out.lines().find(|l| l.contains("Background")).unwrap();
        assert!(background.contains("N/A") && background.contains("Color Source V3"));
        let desktop = out.lines().find(|l| l.contains("Desktop Audio")).unwrap();
        assert!(desktop.contains('✓'));
    }

    #[tokio::test]
    async fn kind_flags_filter_by_substring() {
        let kinds = InputKindFilter {
            input: true,
            ffmpeg: true,
            ..InputKindFilter::default()
        };
        let out = run(&obs(), list(kinds)).await.unwrap();
        assert!(out.contains("Mic/Aux") && out.contains("Clip"));
        assert!(!out.contains("Desktop Audio") && !out.contains("Background"));
    }

    #[tokio::test]
    async fn no_matches_is_not_an_error() {
        let kinds = InputKindFilter {
            vlc: true,
            ..InputKindFilter::default()
        };
        assert_eq!(run(&obs(), list(kinds)).await.unwrap(), "No inputs found.");
    }

    #[tokio::test]
    async fn mute_unknown_input_fails_before_mutating() {
        let obs = obs();
        let err = run(&obs, InputCommand::Mute { name: "Webcam".into() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Input Webcam not found.");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(obs.mutations().is_empty());
    }

    #[tokio::test]
    async fn mute_unmute_toggle() {
        let obs = obs();
        assert_eq!(
            run(&obs, InputCommand::Mute { name: "Mic/Aux".into() }).await.unwrap(),
            "Input Mic/Aux muted."
        );
        assert_eq!(obs.muted("Mic/Aux"), Some(true));
        assert_eq!(
            run(&obs, InputCommand::Toggle { name: "Mic/Aux".into() }).await.unwrap(),
            "Input Mic/Aux unmuted."
        );
        assert_eq!(
            run(&obs, InputCommand::Unmute { name: "Desktop Audio".into() })
                .await
                .unwrap(),
            "Input Desktop Audio unmuted."
        );
        assert_eq!(obs.mutations().len(), 3);
    }
}
