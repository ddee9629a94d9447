/// Errors raised by store backends behind the source, note, and notebook traits.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {reason}")]
    Backend { reason: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage operation timed out after {elapsed_ms}ms: {operation}")]
    Timeout { operation: String, elapsed_ms: u64 },
}
