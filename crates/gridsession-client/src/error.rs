//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure reaching the server (timeout, connection
    /// refused, malformed response stream).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server did not accept the command.
    #[error("server rejected command with status {status}")]
    Protocol {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The response body is not a valid JSON envelope.
    #[error("malformed response envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    /// Malformed parameter list or misconfigured address; raised before any
    /// network call is attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Base URL parsing failed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Check if this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a protocol failure (rejected command or unparseable
    /// envelope).
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol { .. } | Error::Envelope(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
