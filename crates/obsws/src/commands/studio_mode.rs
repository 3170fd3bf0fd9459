//! Studio mode command handlers.

use obsws_core::{Remote, validate};

use crate::cli::{StudioModeArgs, StudioModeCommand};
use crate::error::CliError;

use super::Context;

fn word(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

/// Set studio mode, refusing when it is already in the requested state.
async fn set(remote: &impl Remote, enabled: bool) -> Result<String, CliError> {
    if validate::studio_mode_enabled(remote).await? == enabled {
        return Err(CliError::precondition(format!(
            "Studio mode is already {}.",
            word(enabled)
        )));
    }
    remote.set_studio_mode_enabled(enabled).await?;
    Ok(format!("Studio mode has been {}.", word(enabled)))
}

pub async fn handle(
    remote: &impl Remote,
    args: StudioModeArgs,
    _ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        StudioModeCommand::Enable => set(remote, true).await,
        StudioModeCommand::Disable => set(remote, false).await,

        StudioModeCommand::Toggle => {
            let enabled = !remote.studio_mode_enabled().await?;
            remote.set_studio_mode_enabled(enabled).await?;
            Ok(format!("Studio mode is now {}.", word(enabled)))
        }

        StudioModeCommand::Status => {
            let enabled = remote.studio_mode_enabled().await?;
            Ok(format!("Studio mode is {}.", word(enabled)))
        }
    }
}
