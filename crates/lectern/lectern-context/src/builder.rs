//! ContextBuilder: fetches items from the stores and runs the assembly pipeline.
//!
//! Phases: accumulate (fetch into `items`) → process (deduplicate,
//! prioritize, truncate; once, in that order) → format. [`ContextBuilder::build`]
//! consumes the builder, so a built instance cannot be reused.

use lectern_core::constants::{NOTEBOOK_TABLE, NOTE_TABLE, SOURCE_TABLE};
use lectern_core::errors::{LecternError, LecternResult};
use lectern_core::models::{
    ensure_record_id, ContentMap, ContextConfig, ContextDepth, ContextItem, ContextResponse,
    EntityRef, ItemType, Note, Notebook, Source, SourceInsight,
};
use lectern_core::traits::{IContentStore, ITokenCounter};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::formats;
use crate::params::ContextParams;
use crate::pipeline;

/// Whether a miss on a lookup fails the build or is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    /// Named by the caller. A miss is [`LecternError::NotFound`].
    Required,
    /// Reached through a notebook. A miss is logged and skipped.
    Transitive,
}

/// Per-request context assembler.
pub struct ContextBuilder<'a> {
    store: &'a dyn IContentStore,
    counter: &'a dyn ITokenCounter,
    params: ContextParams,
    /// Depth overrides with normalized keys.
    overrides: Option<ContextConfig>,
    items: Vec<ContextItem>,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(
        store: &'a dyn IContentStore,
        counter: &'a dyn ITokenCounter,
        params: ContextParams,
    ) -> Self {
        let overrides = params.context_config.as_ref().map(ContextConfig::normalized);
        Self {
            store,
            counter,
            params,
            overrides,
            items: Vec::new(),
        }
    }

    pub fn params(&self) -> &ContextParams {
        &self.params
    }

    pub fn items(&self) -> &[ContextItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Duplicates are resolved later by [`Self::remove_duplicates`].
    pub fn add_item(&mut self, item: ContextItem) {
        self.items.push(item);
    }

    /// Keep the first occurrence of each id. Returns how many were dropped.
    pub fn remove_duplicates(&mut self) -> usize {
        pipeline::remove_duplicates(&mut self.items)
    }

    /// Stable sort by priority, highest first.
    pub fn prioritize(&mut self) {
        pipeline::prioritize(&mut self.items);
    }

    /// Greedily keep items that fit in `budget`. Returns how many were dropped.
    pub fn truncate_to_fit(&mut self, budget: usize) -> usize {
        pipeline::truncate_to_fit(&mut self.items, budget)
    }

    /// Snapshot the current items as a response. No side effects.
    pub fn format_response(&self) -> ContextResponse {
        formats::format_response(&self.items, &self.params)
    }

    /// Fetch everything the params name, run the pipeline, and format.
    ///
    /// A required lookup that misses returns [`LecternError::NotFound`]
    /// as is; every other failure comes back as
    /// [`LecternError::AssemblyFailed`].
    pub async fn build(mut self) -> LecternResult<ContextResponse> {
        if let Err(err) = self.assemble().await {
            warn!(error = %err, "context assembly aborted");
            return Err(err.into_assembly_failure());
        }

        self.process();
        let response = self.format_response();

        info!(
            items = response.total_items,
            tokens = response.total_tokens,
            sources = response.metadata.source_count,
            notes = response.metadata.note_count,
            insights = response.metadata.insight_count,
            max_tokens = ?self.params.max_tokens,
            "context built"
        );

        Ok(response)
    }

    async fn assemble(&mut self) -> LecternResult<()> {
        if !self.params.has_targets() {
            debug!("no source, notebook, or explicit ids configured; returning empty context");
            return Ok(());
        }

        if let Some(source_id) = self.params.source_id.clone() {
            let depth = self.explicit_source_depth(&source_id);
            self.add_source_context(&source_id, depth, Lookup::Required)
                .await?;
        }

        if let Some(notebook_id) = self.params.notebook_id.clone() {
            self.add_notebook_context(&notebook_id).await?;
        }

        self.process_custom_params().await
    }

    fn process(&mut self) {
        let duplicates = self.remove_duplicates();
        self.prioritize();
        let truncated = match self.params.max_tokens {
            Some(budget) => self.truncate_to_fit(budget),
            None => 0,
        };
        debug!(duplicates, truncated, kept = self.items.len(), "pipeline complete");
    }

    async fn process_custom_params(&mut self) -> LecternResult<()> {
        for source_id in self.params.source_ids.clone() {
            let depth = self.explicit_source_depth(&source_id);
            self.add_source_context(&source_id, depth, Lookup::Required)
                .await?;
        }
        for note_id in self.params.note_ids.clone() {
            let depth = self.explicit_note_depth(&note_id);
            self.add_note_context(&note_id, depth, Lookup::Required)
                .await?;
        }
        Ok(())
    }

    async fn add_notebook_context(&mut self, notebook_id: &str) -> LecternResult<()> {
        let full_id = ensure_record_id(NOTEBOOK_TABLE, notebook_id);
        let notebook = self
            .store
            .get_notebook(&full_id)
            .await?
            .ok_or_else(|| LecternError::not_found(NOTEBOOK_TABLE, full_id.clone()))?;

        match self.overrides.clone() {
            Some(config) => self.add_configured_members(&config).await,
            None => self.add_default_members(&notebook).await,
        }
    }

    /// Expand exactly the entries of a per-build config at their depths.
    async fn add_configured_members(&mut self, config: &ContextConfig) -> LecternResult<()> {
        for (source_id, depth) in &config.sources {
            self.add_source_context(source_id, *depth, Lookup::Transitive)
                .await?;
        }
        if self.params.include_notes {
            for (note_id, depth) in &config.notes {
                self.add_note_context(note_id, *depth, Lookup::Transitive)
                    .await?;
            }
        }
        Ok(())
    }

    /// Sources at `insights`, notes at `full content`. Null ids are skipped.
    async fn add_default_members(&mut self, notebook: &Notebook) -> LecternResult<()> {
        let sources = self.store.notebook_sources(notebook).await?;
        debug!(notebook = %notebook.id, count = sources.len(), "notebook sources listed");
        for source_id in present_ids(sources) {
            self.add_source_context(&source_id, ContextDepth::Insights, Lookup::Transitive)
                .await?;
        }

        if self.params.include_notes {
            let notes = self.store.notebook_notes(notebook).await?;
            debug!(notebook = %notebook.id, count = notes.len(), "notebook notes listed");
            for note_id in present_ids(notes) {
                self.add_note_context(&note_id, ContextDepth::FullContent, Lookup::Transitive)
                    .await?;
            }
        }
        Ok(())
    }

    async fn add_source_context(
        &mut self,
        source_id: &str,
        depth: ContextDepth,
        lookup: Lookup,
    ) -> LecternResult<()> {
        let Some(size) = depth.context_size() else {
            debug!(source_id, "source excluded");
            return Ok(());
        };

        let full_id = ensure_record_id(SOURCE_TABLE, source_id);
        let Some(source) = self.resolve_source(&full_id, lookup).await? else {
            return Ok(());
        };

        let content = self.store.source_context(&source, size).await?;
        self.push(source.id.clone(), ItemType::Source, content);
        debug!(source_id = %source.id, %depth, %size, "source added");

        if depth.expands_insights() && self.params.include_insights {
            let insights = self.store.source_insights(&source).await?;
            debug!(source_id = %source.id, count = insights.len(), "source insights added");
            for insight in insights {
                let content = insight_content(&source, &insight);
                self.push(insight.id, ItemType::Insight, content);
            }
        }
        Ok(())
    }

    async fn add_note_context(
        &mut self,
        note_id: &str,
        depth: ContextDepth,
        lookup: Lookup,
    ) -> LecternResult<()> {
        let Some(size) = depth.context_size() else {
            debug!(note_id, "note excluded");
            return Ok(());
        };

        let full_id = ensure_record_id(NOTE_TABLE, note_id);
        let Some(note) = self.resolve_note(&full_id, lookup).await? else {
            return Ok(());
        };

        let content = self.store.note_context(&note, size).await?;
        self.push(note.id.clone(), ItemType::Note, content);
        debug!(note_id = %note.id, %depth, %size, "note added");
        Ok(())
    }

    async fn resolve_source(&self, full_id: &str, lookup: Lookup) -> LecternResult<Option<Source>> {
        match self.store.get_source(full_id).await? {
            Some(source) => Ok(Some(source)),
            None => miss(SOURCE_TABLE, full_id, lookup).map(|()| None),
        }
    }

    async fn resolve_note(&self, full_id: &str, lookup: Lookup) -> LecternResult<Option<Note>> {
        match self.store.get_note(full_id).await? {
            Some(note) => Ok(Some(note)),
            None => miss(NOTE_TABLE, full_id, lookup).map(|()| None),
        }
    }

    fn push(&mut self, id: String, item_type: ItemType, content: ContentMap) {
        let priority = self.params.priority.for_type(item_type);
        let item = ContextItem::new(id, item_type, content, self.counter).with_priority(priority);
        self.items.push(item);
    }

    fn explicit_source_depth(&self, source_id: &str) -> ContextDepth {
        let full_id = ensure_record_id(SOURCE_TABLE, source_id);
        self.overrides
            .as_ref()
            .and_then(|config| config.source_depth(&full_id))
            .unwrap_or(ContextDepth::Insights)
    }

    fn explicit_note_depth(&self, note_id: &str) -> ContextDepth {
        let full_id = ensure_record_id(NOTE_TABLE, note_id);
        self.overrides
            .as_ref()
            .and_then(|config| config.note_depth(&full_id))
            .unwrap_or(ContextDepth::FullContent)
    }
}

fn miss(entity: &'static str, full_id: &str, lookup: Lookup) -> LecternResult<()> {
    match lookup {
        Lookup::Required => Err(LecternError::not_found(entity, full_id)),
        Lookup::Transitive => {
            warn!(entity, id = full_id, "referenced record not found; skipping");
            Ok(())
        }
    }
}

fn present_ids(refs: Vec<EntityRef>) -> impl Iterator<Item = String> {
    refs.into_iter()
        .filter_map(|entry| entry.id)
        .filter(|id| !id.trim().is_empty())
}

fn insight_content(source: &Source, insight: &SourceInsight) -> ContentMap {
    let mut content = ContentMap::new();
    content.insert("id".to_string(), Value::String(insight.id.clone()));
    content.insert("source_id".to_string(), Value::String(source.id.clone()));
    content.insert(
        "insight_type".to_string(),
        Value::String(insight.insight_type.clone()),
    );
    content.insert("content".to_string(), Value::String(insight.content.clone()));
    content
}
