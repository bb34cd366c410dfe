//! Codec error type.

use thiserror::Error;

/// Error produced when a stored value cannot be (de)serialized as a session.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The byte sequence is not a valid serialized session.
    #[error("invalid session payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The wire text is not valid hex.
    #[error("invalid wire encoding: {0}")]
    WireText(#[from] hex::FromHexError),
}
