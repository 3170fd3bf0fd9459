//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors, and every
//! error into a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use obsws_config::ConfigError;
use obsws_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    #[allow(dead_code)]
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    /// Emitted by clap itself on usage errors.
    #[allow(dead_code)]
    pub const INVALID_ARGUMENT: i32 = 2;
    pub const INVALID_PARAMETER: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const ALREADY_EXISTS: i32 = 5;
    pub const TIMEOUT: i32 = 6;
    pub const UNKNOWN_ERROR: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to OBS at {endpoint}: {reason}")]
    #[diagnostic(
        code(obsws::connection_failed),
        help(
            "Check that OBS is running with the WebSocket server enabled\n\
             (Tools > WebSocket Server Settings) and that --host/--port match."
        )
    )]
    ConnectionFailed { endpoint: String, reason: String },

    #[error("Authentication with OBS at {endpoint} failed")]
    #[diagnostic(
        code(obsws::auth_failed),
        help("Check the password passed with --password or OBSWS_PASSWORD.")
    )]
    AuthFailed { endpoint: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(obsws::timeout),
        help("Increase the timeout with --timeout or check that OBS is responsive.")
    )]
    Timeout { seconds: u64 },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(obsws::not_found))]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(obsws::already_exists))]
    AlreadyExists { message: String },

    // ── Preconditions ────────────────────────────────────────────────
    /// A local check refused the command; nothing was changed.
    #[error("{message}")]
    #[diagnostic(code(obsws::precondition))]
    Precondition { message: String },

    #[error("{message}")]
    #[diagnostic(code(obsws::invalid_parameter))]
    InvalidParameter { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("OBS rejected the request ({code}): {message}")]
    #[diagnostic(code(obsws::api_error))]
    Api { code: u16, message: String },

    #[error("Internal error: {0}")]
    #[diagnostic(code(obsws::internal))]
    Internal(String),

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(obsws::config),
        help("Fix or remove the config file (obsws-cli/config.toml in your config directory).")
    )]
    Config(#[from] ConfigError),
}

impl CliError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::AlreadyExists { .. } => exit_code::ALREADY_EXISTS,
            Self::InvalidParameter { .. } => exit_code::INVALID_PARAMETER,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Internal(_) => exit_code::UNKNOWN_ERROR,
            Self::ConnectionFailed { .. }
            | Self::AuthFailed { .. }
            | Self::Precondition { .. }
            | Self::Api { .. }
            | Self::Config(_) => exit_code::ERROR,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { endpoint, reason } => {
                CliError::ConnectionFailed { endpoint, reason }
            }

            CoreError::AuthenticationFailed { endpoint } => CliError::AuthFailed { endpoint },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::NotFound { message } => CliError::NotFound { message },

            CoreError::AlreadyExists { message } => CliError::AlreadyExists { message },

            CoreError::InvalidResourceType { message }
            | CoreError::InvalidRequest { message, .. } => CliError::InvalidParameter { message },

            CoreError::InvalidResourceState { message } | CoreError::OutputState { message, .. } => {
                CliError::Precondition { message }
            }

            CoreError::StudioModeNotActive => {
                CliError::precondition("Studio mode is not enabled.")
            }

            CoreError::Api { code, message } => CliError::Api { code, message },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}
