pub mod context_config;
pub mod context_item;
pub mod depth;
pub mod priority;
pub mod record_id;
pub mod records;
pub mod response;

pub use context_config::ContextConfig;
pub use context_item::{ContentMap, ContextItem, ItemType};
pub use depth::{ContextDepth, ContextSize};
pub use priority::PriorityWeights;
pub use record_id::ensure_record_id;
pub use records::{EntityRef, Note, Notebook, Source, SourceInsight};
pub use response::{ContextMetadata, ContextResponse, ResponseConfig};
