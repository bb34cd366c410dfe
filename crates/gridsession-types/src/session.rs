//! In-memory session entity.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::CodecError;

/// Default maximum inactive interval in seconds (30 minutes).
pub const DEFAULT_MAX_INACTIVE_INTERVAL: i64 = 1800;

/// One user session.
///
/// A session is a pure value object: it is created by the store, mutated
/// only by its owning caller, and persisted explicitly. The id is generated
/// once at construction and never changes.
///
/// Expiry is inactivity-based: a session with a positive
/// `max_inactive_interval` is expired once `now - last_accessed_time`
/// reaches that interval. A zero or negative interval means the session
/// never expires. Reading a session through the store does not bump
/// `last_accessed_time`; the owner does that via [`Session::touch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: String,
    creation_time: DateTime<Utc>,
    last_accessed_time: DateTime<Utc>,
    max_inactive_interval: i64,
    attributes: HashMap<String, Value>,
}

impl Session {
    /// Create a new session with a generated id, current timestamps, and
    /// the default inactivity interval.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Create a new session with an explicit id.
    pub fn with_id(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            creation_time: now,
            last_accessed_time: now,
            max_inactive_interval: DEFAULT_MAX_INACTIVE_INTERVAL,
            attributes: HashMap::new(),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns when this session was created.
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    /// Returns when this session was last accessed by its owner.
    pub fn last_accessed_time(&self) -> DateTime<Utc> {
        self.last_accessed_time
    }

    /// Set the last accessed time explicitly.
    pub fn set_last_accessed_time(&mut self, at: DateTime<Utc>) {
        self.last_accessed_time = at;
    }

    /// Record an access now, resetting the inactivity timer.
    pub fn touch(&mut self) {
        self.last_accessed_time = Utc::now();
    }

    /// Returns the maximum inactive interval in seconds.
    ///
    /// Zero or negative means the session never expires.
    pub fn max_inactive_interval(&self) -> i64 {
        self.max_inactive_interval
    }

    /// Set the maximum inactive interval in seconds.
    pub fn set_max_inactive_interval(&mut self, seconds: i64) {
        self.max_inactive_interval = seconds;
    }

    /// Check whether this session has expired.
    pub fn is_expired(&self) -> bool {
        if self.max_inactive_interval <= 0 {
            return false;
        }
        let idle = Utc::now().signed_duration_since(self.last_accessed_time);
        idle.num_seconds() >= self.max_inactive_interval
    }

    /// Store an attribute, replacing any previous value under the same name.
    ///
    /// Accepts any serializable value, including nested containers.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Serialize,
    ) -> Result<(), CodecError> {
        let value = serde_json::to_value(value)?;
        self.attributes.insert(name.into(), value);
        Ok(())
    }

    /// Get an attribute deserialized into a concrete type.
    ///
    /// Returns `None` if the attribute is absent or does not deserialize
    /// into `T`.
    pub fn attribute<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let value = self.attributes.get(name)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Get an attribute as its raw stored value.
    pub fn attribute_value(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Iterate over the names of all stored attributes.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
