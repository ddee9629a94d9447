use lectern_core::config::ContextBuilderConfig;
use lectern_core::models::{ContextConfig, PriorityWeights};

/// Everything a single context build is configured with.
#[derive(Debug, Clone)]
pub struct ContextParams {
    /// Source to include at the top level. A miss fails the build.
    pub source_id: Option<String>,
    /// Notebook whose sources and notes are expanded. A miss fails the build.
    pub notebook_id: Option<String>,
    /// Additional sources named by the caller. Each miss fails the build.
    pub source_ids: Vec<String>,
    /// Additional notes named by the caller. Each miss fails the build.
    pub note_ids: Vec<String>,
    pub include_insights: bool,
    pub include_notes: bool,
    /// Token budget. `None` disables truncation.
    pub max_tokens: Option<usize>,
    /// Per-id depth overrides.
    pub context_config: Option<ContextConfig>,
    pub priority: PriorityWeights,
}

impl ContextParams {
    /// Seed params from config defaults with no targets set.
    pub fn from_config(config: &ContextBuilderConfig) -> Self {
        Self {
            source_id: None,
            notebook_id: None,
            source_ids: Vec::new(),
            note_ids: Vec::new(),
            include_insights: config.include_insights,
            include_notes: config.include_notes,
            max_tokens: config.max_tokens,
            context_config: None,
            priority: config.priority,
        }
    }

    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    pub fn with_notebook_id(mut self, notebook_id: impl Into<String>) -> Self {
        self.notebook_id = Some(notebook_id.into());
        self
    }

    pub fn with_source_ids(mut self, source_ids: Vec<String>) -> Self {
        self.source_ids = source_ids;
        self
    }

    pub fn with_note_ids(mut self, note_ids: Vec<String>) -> Self {
        self.note_ids = note_ids;
        self
    }

    pub fn with_include_insights(mut self, include_insights: bool) -> Self {
        self.include_insights = include_insights;
        self
    }

    pub fn with_include_notes(mut self, include_notes: bool) -> Self {
        self.include_notes = include_notes;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<usize>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_context_config(mut self, context_config: Option<ContextConfig>) -> Self {
        self.context_config = context_config;
        self
    }

    pub fn with_priority(mut self, priority: PriorityWeights) -> Self {
        self.priority = priority;
        self
    }

    /// Whether any source, notebook, or explicit id is configured.
    pub fn has_targets(&self) -> bool {
        self.source_id.is_some()
            || self.notebook_id.is_some()
            || !self.source_ids.is_empty()
            || !self.note_ids.is_empty()
    }
}

impl Default for ContextParams {
    fn default() -> Self {
        Self::from_config(&ContextBuilderConfig::default())
    }
}
