//! # lectern-core
//!
//! Foundation crate for Lectern context assembly.
//! Defines the item and record models, the store and tokenizer traits,
//! errors, config, and tracing setup. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::LecternConfig;
pub use errors::{LecternError, LecternResult};
pub use models::{ContentMap, ContextDepth, ContextItem, ContextResponse, ItemType};
