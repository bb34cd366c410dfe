//! Cache client implementation.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::command::{CacheTemplate, Command, CACHE_NAME, CACHE_TEMPLATE, CMD, KEY, VALUE};
use crate::error::{Error, Result};

/// Default base address of the cache server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default command endpoint path.
pub const DEFAULT_ENDPOINT: &str = "ignite";

/// Default cache name.
pub const DEFAULT_CACHE_NAME: &str = "session.cache";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON envelope wrapping every command response.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Value,
}

/// Client for the four-command cache protocol.
///
/// Each operation is one GET request; the underlying connection pool is
/// managed by [`reqwest::Client`], so cloning is cheap and a clone shares
/// the pool. Exactly one cache name is in scope per client instance, fixed
/// at build time.
///
/// # Example
///
/// ```no_run
/// use gridsession_client::CacheClient;
///
/// # async fn example() -> gridsession_client::Result<()> {
/// let client = CacheClient::builder()
///     .base_url("http://localhost:8080")
///     .cache_name("session.cache")
///     .build()?;
///
/// let value = client.get("abc123").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CacheClient {
    http: reqwest::Client,
    base_url: Url,
    endpoint: String,
    cache_name: String,
    timeout: Duration,
}

impl CacheClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the cache name this client operates on.
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Read one value.
    ///
    /// Returns `None` when the server reports the key as absent.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let response = self.execute(Command::Get, &[KEY, key]).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Write one value, replacing any prior value under the key.
    pub async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.execute(Command::Put, &[KEY, key, VALUE, value]).await?;
        Ok(())
    }

    /// Remove one value. Removing an absent key is not an error.
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.execute(Command::Remove, &[KEY, key]).await?;
        Ok(())
    }

    /// Ensure the configured cache exists on the server (administrative).
    pub async fn get_or_create_cache(&self, template: CacheTemplate) -> Result<()> {
        self.execute(Command::GetOrCreateCache, &[CACHE_TEMPLATE, template.as_str()])
            .await?;
        Ok(())
    }

    /// Execute one command against the server.
    ///
    /// `params` is a flat key/value list appended to the query string after
    /// `cmd` and `cacheName`, in the order given. An odd-length list is an
    /// [`Error::InvalidArgument`], raised before any network call. Returns
    /// the envelope's `response` field; callers that only care about
    /// success discard it.
    pub async fn execute(&self, command: Command, params: &[&str]) -> Result<Value> {
        if params.len() % 2 != 0 {
            return Err(Error::InvalidArgument(format!(
                "parameter list must hold key/value pairs, got {} entries",
                params.len()
            )));
        }

        let url = self.command_url(command, params)?;
        debug!(cmd = command.as_str(), cache = %self.cache_name, "executing cache command");

        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Error::Protocol { status });
        }

        let body = response.bytes().await.map_err(Error::Transport)?;
        let envelope: Envelope = serde_json::from_slice(&body)?;
        Ok(envelope.response)
    }

    /// Build the request URL for a command.
    ///
    /// The query is assembled by hand so parameter order is exactly `cmd`,
    /// `cacheName`, then the caller's pairs, with values inserted literally.
    /// Hex-encoded values are already URL-safe; key and cache names are
    /// assumed to be safe identifiers.
    fn command_url(&self, command: Command, params: &[&str]) -> Result<Url> {
        let mut url = self.base_url.join(&self.endpoint)?;

        let mut query = String::new();
        query.push_str(CMD);
        query.push('=');
        query.push_str(command.as_str());
        query.push('&');
        query.push_str(CACHE_NAME);
        query.push('=');
        query.push_str(&self.cache_name);
        for pair in params.chunks(2) {
            query.push('&');
            query.push_str(pair[0]);
            query.push('=');
            query.push_str(pair[1]);
        }

        url.set_query(Some(&query));
        Ok(url)
    }
}

/// Builder for creating a [`CacheClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    connection: Option<String>,
    endpoint: String,
    cache_name: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            connection: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL of the cache server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the server address from a `host:port` connection string.
    ///
    /// Ignored when a full base URL is also set. A malformed string fails
    /// the build with [`Error::InvalidArgument`].
    pub fn connection_string(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Set the command endpoint path.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the cache name all commands operate on.
    pub fn cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CacheClient> {
        let raw = match (self.base_url, self.connection) {
            (Some(url), _) => url,
            (None, Some(connection)) => parse_connection_string(&connection)?,
            (None, None) => DEFAULT_BASE_URL.to_string(),
        };

        let mut base_url = Url::parse(&raw)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(Error::Transport)?;

        Ok(CacheClient {
            http,
            base_url,
            endpoint: self.endpoint.trim_start_matches('/').to_string(),
            cache_name: self.cache_name,
            timeout: self.timeout,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a `host:port` connection string into a base URL.
fn parse_connection_string(connection: &str) -> Result<String> {
    let (host, port) = connection.split_once(':').ok_or_else(|| {
        Error::InvalidArgument(format!("connection string must be host:port, got {connection:?}"))
    })?;

    if host.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "connection string has an empty host: {connection:?}"
        )));
    }

    let port: u16 = port.parse().map_err(|_| {
        Error::InvalidArgument(format!("connection string has an invalid port: {connection:?}"))
    })?;

    Ok(format!("http://{host}:{port}"))
}
