// Single source of truth for all default values.

// --- Context builder ---
pub const DEFAULT_INCLUDE_INSIGHTS: bool = true;
pub const DEFAULT_INCLUDE_NOTES: bool = true;
pub const DEFAULT_MAX_TOKENS: Option<usize> = None;

// --- Priorities ---
pub const DEFAULT_SOURCE_PRIORITY: i64 = 100;
pub const DEFAULT_NOTE_PRIORITY: i64 = 80;
pub const DEFAULT_INSIGHT_PRIORITY: i64 = 60;

// --- Tokens ---
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_ENCODING: &str = "cl100k_base";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
