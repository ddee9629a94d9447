use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::depth::ContextDepth;
use super::record_id::ensure_record_id;
use crate::constants::{NOTE_TABLE, SOURCE_TABLE};

/// Per-build depth overrides keyed by source id and note id.
///
/// Keys may be bare or table-prefixed; [`ContextConfig::normalized`] brings
/// them to the prefixed form the stores use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub sources: BTreeMap<String, ContextDepth>,
    pub notes: BTreeMap<String, ContextDepth>,
}

impl ContextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, id: impl Into<String>, depth: ContextDepth) -> Self {
        self.sources.insert(id.into(), depth);
        self
    }

    pub fn with_note(mut self, id: impl Into<String>, depth: ContextDepth) -> Self {
        self.notes.insert(id.into(), depth);
        self
    }

    /// Copy with every key normalized to `table:key`.
    ///
    /// If a bare and a prefixed key collide, the entry that sorts last wins.
    pub fn normalized(&self) -> Self {
        Self {
            sources: self
                .sources
                .iter()
                .map(|(id, depth)| (ensure_record_id(SOURCE_TABLE, id), *depth))
                .collect(),
            notes: self
                .notes
                .iter()
                .map(|(id, depth)| (ensure_record_id(NOTE_TABLE, id), *depth))
                .collect(),
        }
    }

    pub fn source_depth(&self, source_id: &str) -> Option<ContextDepth> {
        self.sources.get(source_id).copied()
    }

    pub fn note_depth(&self, note_id: &str) -> Option<ContextDepth> {
        self.notes.get(note_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.notes.is_empty()
    }
}
