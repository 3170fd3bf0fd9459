//! Virtual camera command handlers.

use obsws_core::Remote;

use crate::cli::{VirtualCamArgs, VirtualCamCommand};
use crate::error::CliError;

use super::Context;

fn state(active: bool) -> String {
    if active {
        "Virtual camera is enabled.".into()
    } else {
        "Virtual camera is disabled.".into()
    }
}

pub async fn handle(
    remote: &impl Remote,
    args: VirtualCamArgs,
    _ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        VirtualCamCommand::Start => {
            if remote.virtual_cam_active().await? {
                return Err(CliError::precondition("Virtual camera is already active."));
            }
            remote.start_virtual_cam().await?;
            Ok("Virtual camera started.".into())
        }

        VirtualCamCommand::Stop => {
            if !remote.virtual_cam_active().await? {
                return Err(CliError::precondition("Virtual camera is not active."));
            }
            remote.stop_virtual_cam().await?;
            Ok("Virtual camera stopped.".into())
        }

        VirtualCamCommand::Toggle => Ok(state(remote.toggle_virtual_cam().await?)),

        VirtualCamCommand::Status => Ok(state(remote.virtual_cam_active().await?)),
    }
}
