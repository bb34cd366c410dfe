//! Configuration for the session store.

use std::time::Duration;

/// Default cache name sessions are stored under.
pub const DEFAULT_CACHE_NAME: &str = gridsession_client::DEFAULT_CACHE_NAME;

/// Default maximum inactive interval for new sessions (30 minutes).
pub const DEFAULT_MAX_INACTIVE_INTERVAL: i64 = gridsession_types::DEFAULT_MAX_INACTIVE_INTERVAL;

/// Default timeout for cache commands.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the session store.
///
/// Fixed after [`SessionStore::connect`](crate::SessionStore::connect); the
/// store holds no other state across calls.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Full base URL of the cache server. Takes precedence over
    /// `connection`.
    pub base_url: Option<String>,

    /// Server address as a `host:port` connection string.
    pub connection: Option<String>,

    /// Command endpoint path on the server.
    pub endpoint: Option<String>,

    /// Name of the cache sessions are stored under.
    pub cache_name: String,

    /// Inactivity interval applied to newly created sessions, in seconds.
    /// Zero or negative means new sessions never expire; `None` leaves the
    /// entity's built-in default in place.
    pub default_max_inactive_interval: Option<i64>,

    /// Timeout for each cache command.
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            connection: None,
            endpoint: None,
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            default_max_inactive_interval: Some(DEFAULT_MAX_INACTIVE_INTERVAL),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cache server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the server address from a `host:port` connection string.
    pub fn with_connection_string(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Set the command endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the cache name sessions are stored under.
    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Set the inactivity interval applied to newly created sessions.
    pub fn with_default_max_inactive_interval(mut self, seconds: i64) -> Self {
        self.default_max_inactive_interval = Some(seconds);
        self
    }

    /// Leave newly created sessions on the entity's built-in default
    /// interval.
    pub fn without_default_max_inactive_interval(mut self) -> Self {
        self.default_max_inactive_interval = None;
        self
    }

    /// Set the timeout for each cache command.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
