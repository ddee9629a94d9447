//! One-call entry points. Each one only shapes a [`ContextParams`] and runs
//! [`ContextBuilder::build`].

use lectern_core::errors::LecternResult;
use lectern_core::models::{ContextConfig, ContextResponse};
use lectern_core::traits::{IContentStore, ITokenCounter};

use crate::builder::ContextBuilder;
use crate::params::ContextParams;

/// Context for a whole notebook, optionally narrowed by per-id depths.
pub async fn build_notebook_context(
    store: &dyn IContentStore,
    counter: &dyn ITokenCounter,
    notebook_id: &str,
    context_config: Option<ContextConfig>,
    max_tokens: Option<usize>,
) -> LecternResult<ContextResponse> {
    let params = ContextParams::default()
        .with_notebook_id(notebook_id)
        .with_context_config(context_config)
        .with_max_tokens(max_tokens);
    ContextBuilder::new(store, counter, params).build().await
}

/// Context for a single source.
pub async fn build_source_context(
    store: &dyn IContentStore,
    counter: &dyn ITokenCounter,
    source_id: &str,
    include_insights: bool,
    max_tokens: Option<usize>,
) -> LecternResult<ContextResponse> {
    let params = ContextParams::default()
        .with_source_id(source_id)
        .with_include_insights(include_insights)
        .with_max_tokens(max_tokens);
    ContextBuilder::new(store, counter, params).build().await
}

/// Context for an explicit mix of sources and notes, plus an optional notebook.
pub async fn build_mixed_context(
    store: &dyn IContentStore,
    counter: &dyn ITokenCounter,
    source_ids: Vec<String>,
    note_ids: Vec<String>,
    notebook_id: Option<&str>,
    max_tokens: Option<usize>,
) -> LecternResult<ContextResponse> {
    let mut params = ContextParams::default()
        .with_source_ids(source_ids)
        .with_note_ids(note_ids)
        .with_max_tokens(max_tokens);
    if let Some(notebook_id) = notebook_id {
        params = params.with_notebook_id(notebook_id);
    }
    ContextBuilder::new(store, counter, params).build().await
}
