use std::sync::Arc;

use lectern_core::config::TokenConfig;
use lectern_core::errors::{LecternError, LecternResult};
use lectern_core::traits::ITokenCounter;
use moka::sync::Cache;
use tiktoken_rs::CoreBPE;
use tracing::debug;

/// Token counter wrapping tiktoken's `cl100k_base` tokenizer.
/// Caches results per blake3 content hash.
#[derive(Clone)]
pub struct TokenCounter {
    bpe: Arc<CoreBPE>,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Create a counter whose cache holds up to `cache_capacity` entries.
    pub fn new(cache_capacity: u64) -> LecternResult<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| LecternError::TokenizerUnavailable {
            reason: e.to_string(),
        })?;
        debug!(cache_capacity, "loaded cl100k_base tokenizer");
        Ok(Self {
            bpe: Arc::new(bpe),
            cache: Cache::new(cache_capacity),
        })
    }

    pub fn from_config(config: &TokenConfig) -> LecternResult<Self> {
        Self::new(config.cache_capacity)
    }

    /// Count tokens in the given text (uncached).
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Count tokens with blake3 content-hash caching.
    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }
}

impl ITokenCounter for TokenCounter {
    fn count(&self, text: &str) -> usize {
        self.count_cached(text)
    }
}
