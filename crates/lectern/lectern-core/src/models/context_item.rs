use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::ITokenCounter;

/// Structured payload carried by an item.
pub type ContentMap = serde_json::Map<String, serde_json::Value>;

/// Kind of context item. Determines the response bucket and default priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Source,
    Note,
    Insight,
}

impl ItemType {
    pub const ALL: &'static [ItemType] = &[Self::Source, Self::Note, Self::Insight];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Note => "note",
            Self::Insight => "insight",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One retrievable unit of context.
///
/// `token_count` is fixed at construction: either supplied by the caller or
/// counted from the serialized `content`. Priority never leaves the process;
/// it only drives ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub content: ContentMap,
    #[serde(skip)]
    pub priority: i64,
    pub token_count: usize,
}

impl ContextItem {
    /// Build an item, counting its tokens with `counter`.
    pub fn new(
        id: impl Into<String>,
        item_type: ItemType,
        content: ContentMap,
        counter: &dyn ITokenCounter,
    ) -> Self {
        let token_count = counter.count_content(&content);
        Self::with_token_count(id, item_type, content, token_count)
    }

    /// Build an item with a caller-supplied token count.
    pub fn with_token_count(
        id: impl Into<String>,
        item_type: ItemType,
        content: ContentMap,
        token_count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            item_type,
            content,
            priority: 0,
            token_count,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}
