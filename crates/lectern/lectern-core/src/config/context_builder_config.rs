use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PriorityWeights;

/// Defaults applied to every context build unless the caller overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextBuilderConfig {
    /// Expand sources at `insights` depth into their insight items.
    pub include_insights: bool,
    /// Include a notebook's notes when no per-build config is given.
    pub include_notes: bool,
    /// Token budget. `None` disables truncation.
    pub max_tokens: Option<usize>,
    /// Priority per item type.
    pub priority: PriorityWeights,
}

impl Default for ContextBuilderConfig {
    fn default() -> Self {
        Self {
            include_insights: defaults::DEFAULT_INCLUDE_INSIGHTS,
            include_notes: defaults::DEFAULT_INCLUDE_NOTES,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            priority: PriorityWeights::default(),
        }
    }
}
