//! Configuration file support for obsws-cli.
//!
//! A flat TOML file at the platform config directory, overlaid by
//! `OBSWS_*` environment variables, on top of built-in defaults. The CLI
//! layers its own flags over the result.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use obsws_core::ConnectionConfig;
use obsws_core::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

/// Prefix shared by every environment variable the tool reads.
pub const ENV_PREFIX: &str = "OBSWS_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config ─────────────────────────────────────────────────────

/// Everything the config file may set. All keys are optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// obs-websocket password (plaintext; prefer `OBSWS_PASSWORD`).
    pub password: String,
    /// Connect and per-request timeout, in seconds.
    pub timeout: u64,
    /// Style name, e.g. `disabled` or `cyan`.
    pub style: String,
    pub style_no_border: bool,
    /// Log level when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            password: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            style: "disabled".into(),
            style_no_border: false,
            loglevel: "warn".into(),
        }
    }
}

impl Config {
    /// Connection parameters with no CLI overrides applied.
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            password: SecretString::from(self.password.clone()),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "obsws-cli", "obsws-cli").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("obsws-cli");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Keys the CLI binds verbatim through clap's `env`. figment's `Env`
/// infers value types, so `OBSWS_PASSWORD=123456` would arrive as an
/// integer and `OBSWS_STYLE_NO_BORDER=1` could not become a bool.
const CLI_BOUND_KEYS: [&str; 5] = ["host", "password", "style", "style_no_border", "loglevel"];

/// Provider chain: defaults < TOML file < environment.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&CLI_BOUND_KEYS))
}

/// Load from an explicit file. A missing file just yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    Ok(figment(path).extract()?)
}

/// Load from the canonical config path.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }

    #[test]
    fn file_values_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "host = \"studio.lan\"\nport = 4460\nstyle = \"cyan\"\nstyle_no_border = true\n",
            )?;

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.host, "studio.lan");
            assert_eq!(cfg.port, 4460);
            assert_eq!(cfg.style, "cyan");
            assert!(cfg.style_no_border);
            assert_eq!(cfg.timeout, DEFAULT_TIMEOUT_SECS);
            Ok(())
        });
    }

    #[test]
    fn malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "port = \"not a number\"\n")?;
            assert!(load_config_from(Path::new("config.toml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn numeric_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "port = 4460\ntimeout = 3\n")?;
            jail.set_env("OBSWS_PORT", 4470);
            jail.set_env("OBSWS_TIMEOUT", 11);

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.port, 4470);
            assert_eq!(cfg.timeout, 11);
            Ok(())
        });
    }

    #[test]
    fn digit_only_password_in_env_still_loads() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "password = \"hunter2\"\n")?;
            jail.set_env("OBSWS_PASSWORD", "123456");
            jail.set_env("OBSWS_HOST", "10");
            jail.set_env("OBSWS_STYLE", "true");

            // clap reads these; the file values stay as the fallback
            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(cfg.password, "hunter2");
            assert_eq!(cfg.host, DEFAULT_HOST);
            assert_eq!(cfg.style, "disabled");
            Ok(())
        });
    }

    #[test]
    fn boolish_border_env_still_loads() {
        Jail::expect_with(|jail| {
            jail.set_env("OBSWS_STYLE_NO_BORDER", 1);
            jail.set_env("OBSWS_LOGLEVEL", "debug");

            let cfg = load_config_from(Path::new("config.toml")).unwrap();
            assert!(!cfg.style_no_border);
            assert_eq!(cfg.loglevel, "warn");
            Ok(())
        });
    }

    #[test]
    fn connection_carries_timeout_in_seconds() {
        let cfg = Config {
            timeout: 12,
            ..Config::default()
        };
        assert_eq!(cfg.connection().timeout, Duration::from_secs(12));
        assert_eq!(cfg.connection().endpoint(), "localhost:4455");
    }

    #[test]
    fn config_path_ends_with_file_name() {
        assert!(config_path().ends_with("config.toml"));
    }
}
