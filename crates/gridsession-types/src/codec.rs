//! Session (de)serialization and wire text encoding.
//!
//! A session travels as a hex-encoded, self-describing byte sequence inside
//! a URL query parameter. The remote server answers the literal text `null`
//! for absent keys, so [`from_wire_text`] maps that to "no value" instead of
//! attempting a decode.

use crate::error::CodecError;
use crate::session::Session;

/// Serialize a session, including all attributes, into an opaque byte
/// sequence sufficient to reconstruct an equivalent entity.
pub fn encode(session: &Session) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(session)?)
}

/// Reconstruct a session from bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Session, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode bytes as lowercase hex, safe for transport inside a URL query
/// parameter.
pub fn to_wire_text(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode wire text back into bytes.
///
/// Returns `Ok(None)` for the literal text `null`, which the remote server
/// emits when a key is absent.
pub fn from_wire_text(text: &str) -> Result<Option<Vec<u8>>, CodecError> {
    if text == "null" {
        return Ok(None);
    }
    Ok(Some(hex::decode(text)?))
}
