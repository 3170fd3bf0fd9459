//! Filter command handlers.

use serde_json::{Map, Value};
use tabled::Tabled;

use obsws_core::{CoreError, Filter, Remote};

use crate::cli::{FilterArgs, FilterCommand, FilterTarget};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FilterRow {
    #[tabled(rename = "Filter Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
    #[tabled(rename = "Settings")]
    settings: String,
}

/// The kind's defaults overlaid with the filter's own settings, one
/// `key value` line per setting, sorted by key.
fn settings_cell(defaults: Map<String, Value>, filter: &Filter) -> String {
    let mut merged = defaults;
    for (key, value) in &filter.settings {
        merged.insert(key.clone(), value.clone());
    }
    let mut entries: Vec<(String, Value)> = merged.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{key:<20} {value:>10}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Lookup ──────────────────────────────────────────────────────────

async fn filters_of(remote: &impl Remote, source: &str) -> Result<Vec<Filter>, CliError> {
    match remote.source_filters(source).await {
        Err(CoreError::NotFound { .. }) => Err(CliError::not_found(format!(
            "No source found by the name of {source}."
        ))),
        other => Ok(other?),
    }
}

async fn find_filter(remote: &impl Remote, target: &FilterTarget) -> Result<Filter, CliError> {
    let FilterTarget { source, filter } = target;
    filters_of(remote, source)
        .await?
        .into_iter()
        .find(|f| f.name == *filter)
        .ok_or_else(|| CliError::not_found(format!("Filter {filter} not found for source {source}.")))
}

fn enabled_word(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

/// Enable or disable, refusing when the filter is already in that state.
async fn set_enabled(
    remote: &impl Remote,
    target: &FilterTarget,
    enabled: bool,
    ctx: &Context,
) -> Result<String, CliError> {
    let current = find_filter(remote, target).await?;
    if current.enabled == enabled {
        return Err(CliError::precondition(format!(
            "Filter {} is already {} for source {}",
            target.filter,
            enabled_word(enabled),
            target.source
        )));
    }
    remote
        .set_filter_enabled(&target.source, &target.filter, enabled)
        .await?;
    let verb = if enabled { "Enabled" } else { "Disabled" };
    Ok(format!(
        "{verb} filter {} for source {}",
        ctx.hl(&target.filter),
        ctx.hl(&target.source)
    ))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: FilterArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        FilterCommand::List { source } => {
            let source = util::scene_or_current(remote, source).await?;
            let filters = filters_of(remote, &source).await?;
            if filters.is_empty() {
                return Ok(format!("No filters found for source {}.", ctx.hl(&source)));
            }

            let mut rows = Vec::with_capacity(filters.len());
            for filter in &filters {
                let defaults = remote.filter_default_settings(&filter.kind).await?;
                rows.push(FilterRow {
                    name: filter.name.clone(),
                    kind: output::snake_to_title(&filter.kind),
                    enabled: output::check_mark(filter.enabled, false),
                    settings: settings_cell(defaults, filter),
                });
            }
            Ok(output::render_table(
                &format!("Filters for Source: {source}"),
                &rows,
                &ctx.style,
            ))
        }

        FilterCommand::Enable(target) => set_enabled(remote, &target, true, ctx).await,
        FilterCommand::Disable(target) => set_enabled(remote, &target, false, ctx).await,

        FilterCommand::Toggle(target) => {
            let enabled = !find_filter(remote, &target).await?.enabled;
            remote
                .set_filter_enabled(&target.source, &target.filter, enabled)
                .await?;
            Ok(format!(
                "Filter {} is now {} for source {}",
                ctx.hl(&target.filter),
                enabled_word(enabled),
                ctx.hl(&target.source)
            ))
        }

        FilterCommand::Status(target) => {
            let filter = find_filter(remote, &target).await?;
            Ok(format!(
                "Filter {} is {} for source {}",
                ctx.hl(&target.filter),
                enabled_word(filter.enabled),
                ctx.hl(&target.source)
            ))
        }
    }
}
