use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use lectern_core::errors::{LecternResult, StorageError};
use lectern_core::models::{
    ContentMap, ContextSize, EntityRef, Note, Notebook, Source, SourceInsight,
};
use lectern_core::traits::{INoteStore, INotebookStore, ISourceStore};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceFixture {
    pub id: String,
    pub title: Option<String>,
    pub short: ContentMap,
    pub long: ContentMap,
    pub insights: Vec<SourceInsight>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NoteFixture {
    pub id: String,
    pub title: Option<String>,
    pub short: ContentMap,
    pub long: ContentMap,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotebookFixture {
    pub id: String,
    pub name: Option<String>,
    pub sources: Vec<Option<String>>,
    pub notes: Vec<Option<String>>,
}

/// Serialized form of a whole store, as kept under `golden/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreFixture {
    pub sources: Vec<SourceFixture>,
    pub notes: Vec<NoteFixture>,
    pub notebooks: Vec<NotebookFixture>,
}

/// In-memory implementation of every store trait.
///
/// Records every call it serves, and fails content/listing calls for ids
/// registered with [`InMemoryStore::failing`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sources: BTreeMap<String, SourceFixture>,
    notes: BTreeMap<String, NoteFixture>,
    notebooks: BTreeMap<String, NotebookFixture>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: StoreFixture) -> Self {
        let mut store = Self::new();
        for source in fixture.sources {
            store = store.with_source(source);
        }
        for note in fixture.notes {
            store = store.with_note(note);
        }
        for notebook in fixture.notebooks {
            store = store.with_notebook(notebook);
        }
        store
    }

    /// Load a store from a JSON fixture under the test-fixtures directory.
    pub fn load(relative_path: &str) -> Self {
        Self::from_fixture(crate::load_fixture(relative_path))
    }

    pub fn with_source(mut self, source: SourceFixture) -> Self {
        self.sources.insert(source.id.clone(), source);
        self
    }

    pub fn with_note(mut self, note: NoteFixture) -> Self {
        self.notes.insert(note.id.clone(), note);
        self
    }

    pub fn with_notebook(mut self, notebook: NotebookFixture) -> Self {
        self.notebooks.insert(notebook.id.clone(), notebook);
        self
    }

    /// Make content and listing calls for `id` fail with a backend error.
    pub fn failing(mut self, id: impl Into<String>) -> Self {
        self.failing.insert(id.into());
        self
    }

    /// Calls served so far, e.g. `"source_context source:1 short"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }

    fn check(&self, id: &str) -> LecternResult<()> {
        if self.failing.contains(id) {
            return Err(StorageError::Backend {
                reason: format!("injected failure for {id}"),
            }
            .into());
        }
        Ok(())
    }
}

fn pick(size: ContextSize, short: &ContentMap, long: &ContentMap) -> ContentMap {
    match size {
        ContextSize::Short => short.clone(),
        ContextSize::Long => long.clone(),
    }
}

fn refs(ids: &[Option<String>]) -> Vec<EntityRef> {
    ids.iter().map(|id| EntityRef { id: id.clone() }).collect()
}

#[async_trait]
impl ISourceStore for InMemoryStore {
    async fn get_source(&self, id: &str) -> LecternResult<Option<Source>> {
        self.record(format!("get_source {id}"));
        Ok(self.sources.get(id).map(|s| Source {
            id: s.id.clone(),
            title: s.title.clone(),
        }))
    }

    async fn source_context(&self, source: &Source, size: ContextSize) -> LecternResult<ContentMap> {
        self.record(format!("source_context {} {}", source.id, size));
        self.check(&source.id)?;
        Ok(self
            .sources
            .get(&source.id)
            .map(|s| pick(size, &s.short, &s.long))
            .unwrap_or_default())
    }

    async fn source_insights(&self, source: &Source) -> LecternResult<Vec<SourceInsight>> {
        self.record(format!("source_insights {}", source.id));
        self.check(&source.id)?;
        Ok(self
            .sources
            .get(&source.id)
            .map(|s| s.insights.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl INoteStore for InMemoryStore {
    async fn get_note(&self, id: &str) -> LecternResult<Option<Note>> {
        self.record(format!("get_note {id}"));
        Ok(self.notes.get(id).map(|n| Note {
            id: n.id.clone(),
            title: n.title.clone(),
        }))
    }

    async fn note_context(&self, note: &Note, size: ContextSize) -> LecternResult<ContentMap> {
        self.record(format!("note_context {} {}", note.id, size));
        self.check(&note.id)?;
        Ok(self
            .notes
            .get(&note.id)
            .map(|n| pick(size, &n.short, &n.long))
            .unwrap_or_default())
    }
}

#[async_trait]
impl INotebookStore for InMemoryStore {
    async fn get_notebook(&self, id: &str) -> LecternResult<Option<Notebook>> {
        self.record(format!("get_notebook {id}"));
        Ok(self.notebooks.get(id).map(|nb| Notebook {
            id: nb.id.clone(),
            name: nb.name.clone(),
        }))
    }

    async fn notebook_sources(&self, notebook: &Notebook) -> LecternResult<Vec<EntityRef>> {
        self.record(format!("notebook_sources {}", notebook.id));
        self.check(&notebook.id)?;
        Ok(self
            .notebooks
            .get(&notebook.id)
            .map(|nb| refs(&nb.sources))
            .unwrap_or_default())
    }

    async fn notebook_notes(&self, notebook: &Notebook) -> LecternResult<Vec<EntityRef>> {
        self.record(format!("notebook_notes {}", notebook.id));
        self.check(&notebook.id)?;
        Ok(self
            .notebooks
            .get(&notebook.id)
            .map(|nb| refs(&nb.notes))
            .unwrap_or_default())
    }
}
