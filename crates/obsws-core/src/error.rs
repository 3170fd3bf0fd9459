// ── Core error types ──
//
// Errors surfaced by obsws-core. Consumers never match on raw obs-websocket
// status codes: the `From<obws::error::Error>` impl folds the codes the CLI
// cares about into named variants and keeps the rest as `Api`.

use obws::responses::StatusCode;
use thiserror::Error;

/// Close code obs-websocket sends when the `Identify` password is wrong.
const AUTH_FAILED_CLOSE_CODE: u16 = 4009;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to OBS at {endpoint}: {reason}")]
    ConnectionFailed { endpoint: String, reason: String },

    #[error("Authentication with OBS at {endpoint} failed")]
    AuthenticationFailed { endpoint: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Resource errors ──────────────────────────────────────────────
    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Resource already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Invalid resource type: {message}")]
    InvalidResourceType { message: String },

    #[error("Invalid resource state: {message}")]
    InvalidResourceState { message: String },

    // ── State errors ─────────────────────────────────────────────────
    #[error("Studio mode is not active")]
    StudioModeNotActive,

    #[error("Output state conflict ({code}): {message}")]
    OutputState { code: u16, message: String },

    #[error("Invalid request ({code}): {message}")]
    InvalidRequest { code: u16, message: String },

    // ── Remote API errors (unrecognized codes) ───────────────────────
    #[error("OBS rejected the request ({code}): {message}")]
    Api { code: u16, message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Translate a failure from the connect/handshake phase.
    ///
    /// Needs the endpoint and configured timeout, which the plain
    /// `From` conversion cannot know.
    pub fn from_connect(err: obws::error::Error, endpoint: &str, timeout_secs: u64) -> Self {
        match err {
            obws::error::Error::Timeout => Self::Timeout { timeout_secs },
            obws::error::Error::Handshake(obws::client::HandshakeError::ConnectionClosed(
                Some(details),
            )) if u16::from(details.code) == AUTH_FAILED_CLOSE_CODE => {
                Self::AuthenticationFailed {
                    endpoint: endpoint.to_owned(),
                }
            }
            obws::error::Error::Connect(e) => Self::ConnectionFailed {
                endpoint: endpoint.to_owned(),
                reason: e.to_string(),
            },
            obws::error::Error::Handshake(e) => Self::ConnectionFailed {
                endpoint: endpoint.to_owned(),
                reason: e.to_string(),
            },
            other => Self::from(other),
        }
    }

    /// The obs-websocket status code behind this error, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(status(StatusCode::ResourceNotFound)),
            Self::AlreadyExists { .. } => Some(status(StatusCode::ResourceAlreadyExists)),
            Self::InvalidResourceType { .. } => Some(status(StatusCode::InvalidResourceType)),
            Self::InvalidResourceState { .. } => Some(status(StatusCode::InvalidResourceState)),
            Self::StudioModeNotActive => Some(status(StatusCode::StudioModeNotActive)),
            Self::OutputState { code, .. }
            | Self::InvalidRequest { code, .. }
            | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[allow(clippy::as_conversions)]
fn status(code: StatusCode) -> u16 {
    code as u16
}

// ── Conversion from client-library errors ────────────────────────────

impl From<obws::error::Error> for CoreError {
    fn from(err: obws::error::Error) -> Self {
        match err {
            obws::error::Error::Api { code, message } => from_status(code, message),
            obws::error::Error::Timeout => CoreError::Timeout { timeout_secs: 0 },
            obws::error::Error::Connect(e) => CoreError::ConnectionFailed {
                endpoint: String::new(),
                reason: e.to_string(),
            },
            obws::error::Error::Handshake(e) => CoreError::ConnectionFailed {
                endpoint: String::new(),
                reason: e.to_string(),
            },
            obws::error::Error::Disconnected => CoreError::ConnectionFailed {
                endpoint: String::new(),
                reason: "connection to obs-websocket was lost".into(),
            },
            other => CoreError::Internal(other.to_string()),
        }
    }
}

fn from_status(code: StatusCode, message: Option<String>) -> CoreError {
    let message = message.unwrap_or_else(|| format!("{code:?}"));
    match code {
        StatusCode::ResourceNotFound => CoreError::NotFound { message },
        StatusCode::ResourceAlreadyExists => CoreError::AlreadyExists { message },
        StatusCode::InvalidResourceType => CoreError::InvalidResourceType { message },
        StatusCode::InvalidResourceState => CoreError::InvalidResourceState { message },
        StatusCode::StudioModeNotActive => CoreError::StudioModeNotActive,
        StatusCode::OutputRunning
        | StatusCode::OutputNotRunning
        | StatusCode::OutputPaused
        | StatusCode::OutputNotPaused => CoreError::OutputState {
            code: status(code),
            message,
        },
        StatusCode::InvalidRequestField
        | StatusCode::InvalidRequestFieldType
        | StatusCode::RequestFieldOutOfRange
        | StatusCode::RequestFieldEmpty => CoreError::InvalidRequest {
            code: status(code),
            message,
        },
        _ => CoreError::Api {
            code: status(code),
            message,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn api(code: StatusCode) -> obws::error::Error {
        obws::error::Error::Api {
            code,
            message: Some("detail".into()),
        }
    }

    #[test]
    fn resource_not_found_maps_to_not_found() {
        let err = CoreError::from(api(StatusCode::ResourceNotFound));
        assert!(matches!(err, CoreError::NotFound { ref message } if message == "detail"));
        assert_eq!(err.status_code(), Some(600));
    }

    #[test]
    fn invalid_resource_state_keeps_its_code() {
        let err = CoreError::from(api(StatusCode::InvalidResourceState));
        assert!(matches!(err, CoreError::InvalidResourceState { .. }));
        assert_eq!(err.status_code(), Some(604));
    }

    #[test]
    fn output_codes_fold_into_output_state() {
        let err = CoreError::from(api(StatusCode::OutputRunning));
        assert!(matches!(err, CoreError::OutputState { code: 500, .. }));
    }

    #[test]
    fn empty_field_is_an_invalid_request() {
        let err = CoreError::from(api(StatusCode::RequestFieldEmpty));
        assert!(matches!(err, CoreError::InvalidRequest { code: 403, .. }));
    }

    #[test]
    fn unrecognized_code_is_kept_as_api_error() {
        let err = CoreError::from(obws::error::Error::Api {
            code: StatusCode::CannotAct,
            message: None,
        });
        match err {
            CoreError::Api { code, message } => {
                assert_eq!(code, 703);
                assert_eq!(message, "CannotAct");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn connect_timeout_carries_configured_seconds() {
        let err = CoreError::from_connect(obws::error::Error::Timeout, "localhost:4455", 5);
        assert!(matches!(err, CoreError::Timeout { timeout_secs: 5 }));
    }

    #[test]
    fn disconnect_is_a_connection_failure() {
        let err = CoreError::from(obws::error::Error::Disconnected);
        assert!(matches!(err, CoreError::ConnectionFailed { .. }));
        assert_eq!(err.status_code(), None);
    }
}
