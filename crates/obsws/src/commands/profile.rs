//! Profile command handlers.

use tabled::Tabled;

use obsws_core::{Remote, validate};

use crate::cli::{ProfileArgs, ProfileCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile Name")]
    name: String,
    #[tabled(rename = "Current")]
    current: &'static str,
}

fn not_found(name: &str) -> CliError {
    CliError::not_found(format!("Profile {name} not found."))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: ProfileArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        ProfileCommand::List => {
            let profiles = remote.profiles().await?;
            if profiles.names.is_empty() {
                return Ok("No profiles found.".into());
            }
            let rows: Vec<ProfileRow> = profiles
                .names
                .iter()
                .map(|name| ProfileRow {
                    name: name.clone(),
                    current: output::check_mark(profiles.is_current(name), true),
                })
                .collect();
            Ok(output::render_table("Profiles", &rows, &ctx.style))
        }

        ProfileCommand::Current => {
            let profiles = remote.profiles().await?;
            Ok(format!("Current profile: {}", ctx.hl(&profiles.current)))
        }

        ProfileCommand::Switch { name } => {
            let profiles = remote.profiles().await?;
            if !profiles.contains(&name) {
                return Err(not_found(&name));
            }
            if profiles.is_current(&name) {
                return Err(CliError::precondition(format!(
                    "Profile {name} is already the current profile."
                )));
            }
            remote.set_current_profile(&name).await?;
            Ok(format!("Switched to profile {}.", ctx.hl(&name)))
        }

        ProfileCommand::Create { name } => {
            if validate::profile_exists(remote, &name).await? {
                return Err(CliError::already_exists(format!(
                    "Profile {name} already exists."
                )));
            }
            remote.create_profile(&name).await?;
            Ok(format!("Created profile {}.", ctx.hl(&name)))
        }

        ProfileCommand::Remove { name } => {
            if !validate::profile_exists(remote, &name).await? {
                return Err(not_found(&name));
            }
            remote.remove_profile(&name).await?;
            Ok(format!("Removed profile {}.", ctx.hl(&name)))
        }
    }
}
