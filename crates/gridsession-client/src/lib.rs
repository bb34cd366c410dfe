//! HTTP command protocol client for the gridsession cache bridge.
//!
//! The remote cache server understands four commands, each issued as a
//! single GET request of the form
//! `<base>/<endpoint>?cmd=<command>&cacheName=<cache>&<k1>=<v1>...` and
//! answered with a JSON envelope whose `response` field carries the result.
//!
//! # Example
//!
//! ```no_run
//! use gridsession_client::{CacheClient, CacheTemplate, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = CacheClient::builder()
//!     .base_url("http://localhost:8080")
//!     .cache_name("session.cache")
//!     .build()?;
//!
//! client.get_or_create_cache(CacheTemplate::Replicated).await?;
//! client.put("abc123", "deadbeef").await?;
//!
//! if let Some(value) = client.get("abc123").await? {
//!     println!("stored value: {value}");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod command;
mod error;

pub use client::{CacheClient, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_CACHE_NAME, DEFAULT_ENDPOINT};
pub use command::{CacheTemplate, Command, CACHE_NAME, CACHE_TEMPLATE, CMD, KEY, VALUE};
pub use error::{Error, Result};
