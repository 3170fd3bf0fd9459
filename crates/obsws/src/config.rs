//! Resolution of CLI flags over the loaded configuration.
//!
//! clap already folds `OBSWS_*` environment variables into [`GlobalOpts`],
//! so the order is: flag or env, then config file, then built-in default.

use std::time::Duration;

use secrecy::SecretString;

use obsws_config::Config;
use obsws_core::ConnectionConfig;

use crate::cli::{GlobalOpts, LogLevel, StyleName};
use crate::error::CliError;
use crate::style::Style;

/// Everything a command invocation needs, fully resolved.
#[derive(Debug)]
pub struct Settings {
    pub connection: ConnectionConfig,
    pub style: Style,
    pub loglevel: LogLevel,
}

pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Result<Settings, CliError> {
    let mut connection = cfg.connection();
    if let Some(host) = &global.host {
        connection.host.clone_from(host);
    }
    if let Some(port) = global.port {
        connection.port = port;
    }
    if let Some(password) = &global.password {
        connection.password = SecretString::from(password.clone());
    }
    if let Some(timeout) = global.timeout {
        connection.timeout = Duration::from_secs(timeout);
    }

    let name = match global.style {
        Some(name) => name,
        None => parse_setting::<StyleName>("style", &cfg.style)?,
    };
    let name = if no_color() { StyleName::Disabled } else { name };
    let style = Style::new(name, !(global.no_border || cfg.style_no_border));

    let loglevel = match global.loglevel {
        Some(level) => level,
        None => parse_setting::<LogLevel>("loglevel", &cfg.loglevel)?,
    };

    Ok(Settings {
        connection,
        style,
        loglevel,
    })
}

fn parse_setting<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::invalid_parameter(format!("Invalid {key} `{value}` in config.")))
}

/// <https://no-color.org>: any non-empty value disables colour.
fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
