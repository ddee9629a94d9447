/// Lectern version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Record table prefixes used when normalizing bare ids.
pub const SOURCE_TABLE: &str = "source";
pub const NOTE_TABLE: &str = "note";
pub const NOTEBOOK_TABLE: &str = "notebook";

/// Environment variable read by [`crate::tracing_setup::init_tracing`].
pub const LOG_ENV_VAR: &str = "LECTERN_LOG";
