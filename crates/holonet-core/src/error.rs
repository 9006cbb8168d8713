//! Shared error type across Holonet crates.

use thiserror::Error;

/// Stable error codes, used in logs and stats output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream answered with status >= 400.
    HttpStatus,
    /// Body was not valid JSON.
    MalformedPayload,
    /// Connection-level failure (DNS, reset, TLS).
    Transport,
    /// No complete response within the configured window.
    Timeout,
    /// Payload parsed but lacks a field the run depends on.
    UnexpectedShape,
    /// Invalid configuration.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::HttpStatus => "HTTP_STATUS",
            ErrorKind::MalformedPayload => "MALFORMED_PAYLOAD",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::UnexpectedShape => "UNEXPECTED_SHAPE",
            ErrorKind::BadConfig => "BAD_CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HolonetError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum HolonetError {
    #[error("Request failed with status code {status} for {path}")]
    HttpStatus { path: String, status: u16 },
    #[error("malformed payload for {path}: {reason}")]
    MalformedPayload { path: String, reason: String },
    #[error("transport error for {path}: {reason}")]
    Transport { path: String, reason: String },
    #[error("Request timeout for {path}")]
    Timeout { path: String },
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HolonetError {
    /// Map to a stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HolonetError::HttpStatus { .. } => ErrorKind::HttpStatus,
            HolonetError::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            HolonetError::Transport { .. } => ErrorKind::Transport,
            HolonetError::Timeout { .. } => ErrorKind::Timeout,
            HolonetError::UnexpectedShape(_) => ErrorKind::UnexpectedShape,
            HolonetError::BadConfig(_) => ErrorKind::BadConfig,
            HolonetError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// True for the four failures a single upstream fetch can produce.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::HttpStatus
                | ErrorKind::MalformedPayload
                | ErrorKind::Transport
                | ErrorKind::Timeout
        )
    }
}
