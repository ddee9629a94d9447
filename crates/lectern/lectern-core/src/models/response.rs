use serde::{Deserialize, Serialize};

use super::context_item::{ContextItem, ItemType};

/// Result of a context build, grouped by item type.
///
/// All three buckets are always present, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextResponse {
    pub sources: Vec<ContextItem>,
    pub notes: Vec<ContextItem>,
    pub insights: Vec<ContextItem>,
    pub total_tokens: usize,
    pub total_items: usize,
    pub notebook_id: Option<String>,
    pub source_id: Option<String>,
    pub metadata: ContextMetadata,
}

impl ContextResponse {
    pub fn bucket(&self, item_type: ItemType) -> &[ContextItem] {
        match item_type {
            ItemType::Source => &self.sources,
            ItemType::Note => &self.notes,
            ItemType::Insight => &self.insights,
        }
    }

    /// Items in bucket order: sources, notes, insights.
    pub fn iter_items(&self) -> impl Iterator<Item = &ContextItem> {
        self.sources
            .iter()
            .chain(self.notes.iter())
            .chain(self.insights.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

/// Per-type counts plus the settings the build ran with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMetadata {
    pub source_count: usize,
    pub note_count: usize,
    pub insight_count: usize,
    pub config: ResponseConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseConfig {
    pub include_insights: bool,
    pub include_notes: bool,
    pub max_tokens: Option<usize>,
}
