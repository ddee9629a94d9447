use async_trait::async_trait;

use crate::errors::LecternResult;
use crate::models::{ContentMap, ContextSize, EntityRef, Note, Notebook, Source, SourceInsight};

/// Source lookup and content retrieval.
///
/// `get_source` returns `Ok(None)` for a miss; `Err` is reserved for
/// backend failures.
#[async_trait]
pub trait ISourceStore: Send + Sync {
    async fn get_source(&self, id: &str) -> LecternResult<Option<Source>>;
    async fn source_context(&self, source: &Source, size: ContextSize) -> LecternResult<ContentMap>;
    async fn source_insights(&self, source: &Source) -> LecternResult<Vec<SourceInsight>>;
}

/// Note lookup and content retrieval.
#[async_trait]
pub trait INoteStore: Send + Sync {
    async fn get_note(&self, id: &str) -> LecternResult<Option<Note>>;
    async fn note_context(&self, note: &Note, size: ContextSize) -> LecternResult<ContentMap>;
}

/// Notebook lookup and membership listings.
#[async_trait]
pub trait INotebookStore: Send + Sync {
    async fn get_notebook(&self, id: &str) -> LecternResult<Option<Notebook>>;
    async fn notebook_sources(&self, notebook: &Notebook) -> LecternResult<Vec<EntityRef>>;
    async fn notebook_notes(&self, notebook: &Notebook) -> LecternResult<Vec<EntityRef>>;
}

/// Everything a context build reads from.
pub trait IContentStore: ISourceStore + INoteStore + INotebookStore {}

impl<T> IContentStore for T where T: ISourceStore + INoteStore + INotebookStore {}
