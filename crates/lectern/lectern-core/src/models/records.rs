use serde::{Deserialize, Serialize};

/// A source resolved by an [`crate::traits::ISourceStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A note resolved by an [`crate::traits::INoteStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A notebook resolved by an [`crate::traits::INotebookStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Entry in a notebook's source or note listing. The id may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub id: Option<String>,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    pub fn missing() -> Self {
        Self { id: None }
    }
}

/// A derived annotation attached to a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInsight {
    pub id: String,
    pub insight_type: String,
    pub content: String,
}
