//! Session store bridging to the remote cache.

use gridsession_client::{CacheClient, CacheTemplate};
use gridsession_types::{codec, Session};
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::Result;

/// Cache-backed session store.
///
/// Implements the four operations a session-aware web layer needs
/// (create, save, load, delete) by translating each into one command
/// against the remote cache. The store holds only its fixed configuration
/// and a pooled HTTP client, so it is safe to clone and share across
/// concurrent callers without locking; consistency between concurrent
/// writers to the same session id is the remote server's last-write-wins.
///
/// Expired sessions are cleaned up lazily: when a load observes an expired
/// entity it issues a delete before reporting the session absent. There is
/// no background sweep. The read and the delete are two independent round
/// trips, so a concurrent save can be lost to an expiry-triggered delete.
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: CacheClient,
    default_max_inactive_interval: Option<i64>,
}

impl SessionStore {
    /// Connect to the remote cache.
    ///
    /// Issues one `getOrCreate` command with the replicated template so the
    /// configured cache exists before the store is used. This is the only
    /// administrative call the store ever makes.
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        let mut builder = CacheClient::builder()
            .cache_name(&config.cache_name)
            .timeout(config.timeout);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(connection) = &config.connection {
            builder = builder.connection_string(connection);
        }
        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url);
        }

        let client = builder.build()?;
        client.get_or_create_cache(CacheTemplate::Replicated).await?;

        debug!(cache = %config.cache_name, base_url = %client.base_url(), "session store connected");

        Ok(Self {
            client,
            default_max_inactive_interval: config.default_max_inactive_interval,
        })
    }

    /// Create a fresh session with a newly generated id and the store's
    /// default inactivity interval. Performs no network I/O.
    pub fn create_session(&self) -> Session {
        let mut session = Session::new();
        if let Some(interval) = self.default_max_inactive_interval {
            session.set_max_inactive_interval(interval);
        }
        session
    }

    /// Persist a session, fully replacing any previously stored value under
    /// its id.
    pub async fn save(&self, session: &Session) -> Result<()> {
        let bytes = codec::encode(session)?;
        self.client
            .put(session.id(), &codec::to_wire_text(&bytes))
            .await?;
        Ok(())
    }

    /// Load a session by id.
    ///
    /// Returns `Ok(None)` when the remote value is absent or does not
    /// decode into a valid session (a corrupted or legacy-format record
    /// reads as a cache miss). When the stored session has expired, it is
    /// deleted remotely before `Ok(None)` is returned. A valid, unexpired
    /// session is returned as stored: the store does not bump
    /// `last_accessed_time` on read, that is the owner's job.
    ///
    /// Transport and protocol failures are returned as errors, never
    /// conflated with "no session".
    pub async fn get_session(&self, id: &str) -> Result<Option<Session>> {
        let Some(text) = self.client.get(id).await? else {
            return Ok(None);
        };

        let bytes = match codec::from_wire_text(&text) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(None),
            Err(err) => {
                warn!(session_id = %id, error = %err, "discarding stored value with invalid wire encoding");
                return Ok(None);
            }
        };

        let session = match codec::decode(&bytes) {
            Ok(session) => session,
            Err(err) => {
                warn!(session_id = %id, error = %err, "discarding stored value that does not decode into a session");
                return Ok(None);
            }
        };

        if session.is_expired() {
            debug!(session_id = %id, "session expired, removing from cache");
            self.delete(id).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Delete a session by id. Idempotent: deleting an absent session
    /// succeeds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.remove(id).await?;
        Ok(())
    }
}
