//! Response assembly and rendered output formats.

pub mod markdown;
pub mod response;

pub use markdown::MarkdownFormatter;
pub use response::format_response;
