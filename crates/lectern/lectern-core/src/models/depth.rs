use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LecternError;

/// How much of a source or note to place in the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextDepth {
    /// Excluded entirely.
    #[serde(rename = "not in")]
    NotIn,
    /// Summary-level content; sources also expand into their insights.
    #[serde(rename = "insights")]
    Insights,
    /// Complete content, never insights.
    #[serde(rename = "full content")]
    FullContent,
}

impl ContextDepth {
    pub const ALL: &'static [ContextDepth] = &[Self::NotIn, Self::Insights, Self::FullContent];

    pub fn name(&self) -> &'static str {
        match self {
            Self::NotIn => "not in",
            Self::Insights => "insights",
            Self::FullContent => "full content",
        }
    }

    /// Granularity to request from the store, or `None` when excluded.
    pub fn context_size(&self) -> Option<ContextSize> {
        match self {
            Self::NotIn => None,
            Self::Insights => Some(ContextSize::Short),
            Self::FullContent => Some(ContextSize::Long),
        }
    }

    pub fn expands_insights(&self) -> bool {
        matches!(self, Self::Insights)
    }
}

impl fmt::Display for ContextDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContextDepth {
    type Err = LecternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|depth| depth.name() == normalized)
            .ok_or_else(|| LecternError::InvalidInput {
                reason: format!("unknown context depth '{s}'"),
            })
    }
}

/// Content granularity a store is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSize {
    Short,
    Long,
}

impl ContextSize {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for ContextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
