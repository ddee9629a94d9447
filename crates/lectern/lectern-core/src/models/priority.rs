use serde::{Deserialize, Serialize};

use super::context_item::ItemType;
use crate::config::defaults;

/// Priority assigned to items by type. Higher ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub source: i64,
    pub note: i64,
    pub insight: i64,
}

impl PriorityWeights {
    pub fn for_type(&self, item_type: ItemType) -> i64 {
        match item_type {
            ItemType::Source => self.source,
            ItemType::Note => self.note,
            ItemType::Insight => self.insight,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            source: defaults::DEFAULT_SOURCE_PRIORITY,
            note: defaults::DEFAULT_NOTE_PRIORITY,
            insight: defaults::DEFAULT_INSIGHT_PRIORITY,
        }
    }
}
