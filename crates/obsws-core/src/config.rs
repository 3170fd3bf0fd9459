// ── Runtime connection configuration ──
//
// Describes how to reach one obs-websocket endpoint. Built by the CLI from
// flags, environment and the config file; core never reads files itself.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 4455;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connection parameters for a single session.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Host name or address running OBS.
    pub host: String,
    /// obs-websocket port.
    pub port: u16,
    /// Server password. Empty means the server has authentication disabled.
    pub password: SecretString,
    /// Bound on connecting and on every individual request.
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// `host:port`, used in log lines and error messages.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The password to send, or `None` when authentication is off.
    pub fn password(&self) -> Option<&str> {
        let password = self.password.expose_secret();
        (!password.is_empty()).then_some(password)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            password: SecretString::from(String::new()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
