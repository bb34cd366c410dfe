//! Cache-backed web session store.
//!
//! This crate bridges a web application's session handling to a remote
//! key/value cache reachable only through a simple HTTP GET command
//! protocol. Every store operation is one outbound request; the remote
//! cache is the sole source of truth and no session data is retained
//! client-side between calls.
//!
//! # Example
//!
//! ```no_run
//! use gridsession::{SessionStore, StoreConfig};
//!
//! # async fn example() -> gridsession::Result<()> {
//! let store = SessionStore::connect(
//!     StoreConfig::new()
//!         .with_base_url("http://localhost:8080")
//!         .with_cache_name("session.cache"),
//! )
//! .await?;
//!
//! let mut session = store.create_session();
//! session.set_attribute("user", "alice")?;
//! store.save(&session).await?;
//!
//! let loaded = store.get_session(session.id()).await?;
//! assert!(loaded.is_some());
//!
//! store.delete(session.id()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod store;

pub use config::{StoreConfig, DEFAULT_CACHE_NAME, DEFAULT_MAX_INACTIVE_INTERVAL};
pub use error::{Error, Result};
pub use store::SessionStore;

pub use gridsession_client::{CacheClient, CacheTemplate};
pub use gridsession_types::{codec, CodecError, Session};
