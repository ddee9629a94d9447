use super::storage_error::StorageError;

/// Top-level error for everything Lectern does.
#[derive(Debug, thiserror::Error)]
pub enum LecternError {
    /// A required lookup (a top-level source, note, or notebook id) missed.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Any failure other than [`LecternError::NotFound`] surfaced by a context build.
    #[error("context assembly failed: {source}")]
    AssemblyFailed {
        #[source]
        source: Box<LecternError>,
    },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tokenizer unavailable: {reason}")]
    TokenizerUnavailable { reason: String },
}

impl LecternError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Wrap `self` as [`LecternError::AssemblyFailed`].
    ///
    /// Not-found errors and already-wrapped errors pass through unchanged.
    pub fn into_assembly_failure(self) -> Self {
        match self {
            Self::NotFound { .. } | Self::AssemblyFailed { .. } => self,
            other => Self::AssemblyFailed {
                source: Box::new(other),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type LecternResult<T> = Result<T, LecternError>;
