//! Hotkey command handlers.

use tabled::Tabled;

use obsws_core::{KeyModifiers, Remote};

use crate::cli::{HotkeyArgs, HotkeyCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct HotkeyRow {
    #[tabled(rename = "Hotkey Name")]
    name: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: HotkeyArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        HotkeyCommand::List => {
            let rows: Vec<HotkeyRow> = remote
                .hotkeys()
                .await?
                .into_iter()
                .map(|name| HotkeyRow { name })
                .collect();
            Ok(output::render_striped_table("Hotkeys", &rows, &ctx.style))
        }

        HotkeyCommand::Trigger { name } => {
            remote.trigger_hotkey(&name).await?;
            Ok(format!("Triggered hotkey {}.", ctx.hl(&name)))
        }

        HotkeyCommand::TriggerSequence {
            key_id,
            shift,
            ctrl,
            alt,
            cmd,
        } => {
            let modifiers = KeyModifiers {
                shift,
                control: ctrl,
                alt,
                command: cmd,
            };
            remote.trigger_key_sequence(&key_id, modifiers).await?;
            Ok(format!("Triggered key sequence {}.", ctx.hl(&key_id)))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use obsws_core::testing::FakeObs;
    use pretty_assertions::assert_eq;

    use super::*;

    async fn run(obs: &FakeObs, command: HotkeyCommand) -> Result<String, CliError> {
        handle(obs, HotkeyArgs { command }, &Context::default()).await
    }

    #[tokio::test]
    async fn list_keeps_reported_order() {
        let obs = FakeObs::new().with_hotkeys(&[
            "OBSBasic.StartStreaming",
            "OBSBasic.StartRecording",
        ]);
        let out = run(&obs, HotkeyCommand::List).await.unwrap();
        assert!(out.contains("Hotkey Name"));
        let streaming = out.find("StartStreaming").unwrap();
        let recording = out.find("StartRecording").unwrap();
        assert!(streaming < recording);
    }

    #[tokio::test]
    async fn trigger_by_name_and_sequence() {
        let obs = FakeObs::new();
        assert_eq!(
            run(
                &obs,
                HotkeyCommand::Trigger {
                    name: "OBSBasic.StartRecording".into()
                }
            )
            .await
            .unwrap(),
            "Triggered hotkey OBSBasic.StartRecording."
        );
        assert_eq!(
            run(
                &obs,
                HotkeyCommand::TriggerSequence {
                    key_id: "OBS_KEY_F1".into(),
                    shift: true,
                    ctrl: false,
                    alt: true,
                    cmd: false,
                }
            )
            .await
            .unwrap(),
            "Triggered key sequence OBS_KEY_F1."
        );
        assert_eq!(
            obs.mutations(),
            vec![
                "trigger_hotkey(OBSBasic.StartRecording)",
                "trigger_key_sequence(OBS_KEY_F1, shift=true, ctrl=false, alt=true, cmd=false)",
            ]
        );
    }
}
