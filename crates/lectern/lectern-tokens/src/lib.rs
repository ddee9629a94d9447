//! # lectern-tokens
//!
//! Token counting via `tiktoken-rs` (`cl100k_base`), cached per content
//! hash, plus the greedy budget selection used to truncate context.

pub mod budget;
pub mod counter;

pub use budget::TokenBudget;
pub use counter::TokenCounter;
