//! Command names and query parameter constants of the cache protocol.

/// Query parameter naming the command.
pub const CMD: &str = "cmd";

/// Query parameter naming the target cache.
pub const CACHE_NAME: &str = "cacheName";

/// Query parameter carrying the entry key.
pub const KEY: &str = "key";

/// Query parameter carrying the entry value.
pub const VALUE: &str = "val";

/// Query parameter naming the cache topology template.
pub const CACHE_TEMPLATE: &str = "templateName";

/// The four commands the remote cache server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Read one value.
    Get,
    /// Write one value, replacing any prior value.
    Put,
    /// Remove one value; removing an absent key is not an error.
    Remove,
    /// Ensure the named cache exists (administrative).
    GetOrCreateCache,
}

impl Command {
    /// Wire name of the command.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Get => "get",
            Command::Put => "put",
            Command::Remove => "rmv",
            Command::GetOrCreateCache => "getOrCreate",
        }
    }
}

/// Cache topology template used by [`Command::GetOrCreateCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTemplate {
    /// Every node holds a full copy of the cache.
    Replicated,
    /// Entries are partitioned across nodes.
    Partitioned,
}

impl CacheTemplate {
    /// Wire name of the template.
    pub fn as_str(self) -> &'static str {
        match self {
            CacheTemplate::Replicated => "REPLICATED",
            CacheTemplate::Partitioned => "PARTITIONED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_names() {
        assert_eq!(Command::Get.as_str(), "get");
        assert_eq!(Command::Put.as_str(), "put");
        assert_eq!(Command::Remove.as_str(), "rmv");
        assert_eq!(Command::GetOrCreateCache.as_str(), "getOrCreate");
    }

    #[test]
    fn test_template_wire_names() {
        assert_eq!(CacheTemplate::Replicated.as_str(), "REPLICATED");
        assert_eq!(CacheTemplate::Partitioned.as_str(), "PARTITIONED");
    }
}
