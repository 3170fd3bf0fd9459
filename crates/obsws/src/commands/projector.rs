//! Projector command handlers.

use tabled::Tabled;

use obsws_core::{Remote, validate};

use crate::cli::{ProjectorArgs, ProjectorCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MonitorRow {
    #[tabled(rename = "Index")]
    index: u32,
    #[tabled(rename = "Name")]
    name: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: ProjectorArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        ProjectorCommand::ListMonitors => {
            let mut monitors = remote.monitors().await?;
            if monitors.is_empty() {
                return Ok("No monitors found.".into());
            }
            monitors.sort_by_key(|m| m.index);
            let rows: Vec<MonitorRow> = monitors
                .into_iter()
                .map(|m| MonitorRow {
                    index: m.index,
                    name: m.name,
                })
                .collect();
            Ok(output::render_table("Available Monitors", &rows, &ctx.style))
        }

        ProjectorCommand::Open {
            source,
            monitor_index,
        } => {
            let source = util::scene_or_current(remote, source).await?;
            let Some(monitor) = validate::monitor_at(remote, monitor_index).await? else {
                return Err(CliError::not_found(format!(
                    "Monitor with index {monitor_index} not found. \
                     Use `obsws-cli projector ls-m` to see available monitors."
                )));
            };
            remote.open_source_projector(&source, monitor.index).await?;
            Ok(format!(
                "Opened projector for source {} on monitor {}.",
                ctx.hl(&source),
                ctx.hl(&monitor.name)
            ))
        }
    }
}
