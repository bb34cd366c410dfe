//! Store error types.

use thiserror::Error;

/// Error type for store operations.
///
/// Transport and protocol failures surface here as-is; a caller can always
/// tell "no such session" (`Ok(None)` from `get_session`) apart from
/// "could not reach the store" (`Err`).
#[derive(Debug, Error)]
pub enum Error {
    /// The command could not be executed against the remote cache.
    #[error(transparent)]
    Client(#[from] gridsession_client::Error),

    /// The session could not be serialized for storage.
    #[error("session codec error: {0}")]
    Codec(#[from] gridsession_types::CodecError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
