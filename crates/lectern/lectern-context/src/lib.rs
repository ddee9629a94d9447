//! # lectern-context
//!
//! Context assembly for notebooks, sources, and notes.
//!
//! A [`ContextBuilder`] fetches items through an
//! [`IContentStore`](lectern_core::traits::IContentStore), then runs the fixed
//! pipeline deduplicate → prioritize → truncate → format and returns a
//! [`ContextResponse`](lectern_core::ContextResponse).

pub mod builder;
pub mod convenience;
pub mod formats;
pub mod params;
pub mod pipeline;

pub use builder::ContextBuilder;
pub use convenience::{build_mixed_context, build_notebook_context, build_source_context};
pub use formats::MarkdownFormatter;
pub use params::ContextParams;
