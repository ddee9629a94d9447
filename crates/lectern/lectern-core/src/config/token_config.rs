use serde::{Deserialize, Serialize};

use super::defaults;

/// Token counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Entries kept in the content-hash count cache.
    pub cache_capacity: u64,
    /// BPE encoding name. Only `cl100k_base` is supported.
    pub encoding: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
            encoding: defaults::DEFAULT_ENCODING.to_string(),
        }
    }
}
