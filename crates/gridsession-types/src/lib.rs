//! Session entity and wire codec for the gridsession cache bridge.
//!
//! This crate holds the two leaf pieces of the bridge:
//! - [`Session`], the in-memory representation of one user session with
//!   attribute storage and inactivity-based expiry
//! - [`codec`], which turns a session into an opaque byte sequence and a
//!   transport-safe hex string, and back
//!
//! Nothing here performs I/O; sessions are pure value objects mutated only
//! by their owning caller.

pub mod codec;
mod error;
mod session;

pub use error::CodecError;
pub use session::{Session, DEFAULT_MAX_INACTIVE_INTERVAL};
