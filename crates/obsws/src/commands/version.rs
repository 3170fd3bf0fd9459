use obsws_core::Remote;

use crate::error::CliError;

use super::Context;

pub async fn handle(remote: &impl Remote, ctx: &Context) -> Result<String, CliError> {
    let version = remote.version().await?;
    Ok(format!(
        "OBS Client version: {} with WebSocket version: {}",
        ctx.hl(&version.obs_version),
        ctx.hl(&version.websocket_version)
    ))
}
