//! Post-fetch pipeline stages: deduplicate → prioritize → truncate.

pub mod deduplication;
pub mod ordering;
pub mod truncation;

pub use deduplication::remove_duplicates;
pub use ordering::prioritize;
pub use truncation::truncate_to_fit;
