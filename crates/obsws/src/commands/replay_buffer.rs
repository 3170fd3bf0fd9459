//! Replay buffer command handlers.

use obsws_core::Remote;

use crate::cli::{ReplayBufferArgs, ReplayBufferCommand};
use crate::error::CliError;

use super::Context;

fn state(active: bool) -> String {
    if active {
        "Replay buffer is active.".into()
    } else {
        "Replay buffer is not active.".into()
    }
}

pub async fn handle(
    remote: &impl Remote,
    args: ReplayBufferArgs,
    _ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        ReplayBufferCommand::Start => {
            if remote.replay_buffer_active().await? {
                return Err(CliError::precondition("Replay buffer is already active."));
            }
            remote.start_replay_buffer().await?;
            Ok("Replay buffer started.".into())
        }

        ReplayBufferCommand::Stop => {
            if !remote.replay_buffer_active().await? {
                return Err(CliError::precondition("Replay buffer is not active."));
            }
            remote.stop_replay_buffer().await?;
            Ok("Replay buffer stopped.".into())
        }

        ReplayBufferCommand::Toggle => Ok(state(remote.toggle_replay_buffer().await?)),

        ReplayBufferCommand::Status => Ok(state(remote.replay_buffer_active().await?)),

        ReplayBufferCommand::Save => {
            if !remote.replay_buffer_active().await? {
                return Err(CliError::precondition(
                    "Replay buffer is not active, cannot save.",
                ));
            }
            remote.save_replay_buffer().await?;
            Ok("Replay buffer saved.".into())
        }
    }
}
