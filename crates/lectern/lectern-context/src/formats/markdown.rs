//! Markdown output format.

use lectern_core::models::{ContextItem, ContextResponse, ItemType};

/// Markdown formatter for prompt injection.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a context response as Markdown.
    pub fn format(&self, response: &ContextResponse) -> String {
        let mut md = String::new();
        md.push_str("# Context\n\n");
        md.push_str(&format!(
            "*Items: {} | Token count: {}*\n\n",
            response.total_items, response.total_tokens
        ));

        for item_type in ItemType::ALL {
            let items = response.bucket(*item_type);
            if items.is_empty() {
                continue;
            }
            md.push_str(&format!("## {}\n\n", section_title(*item_type)));
            for item in items {
                push_item(&mut md, item);
            }
        }

        md
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn section_title(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Source => "Sources",
        ItemType::Note => "Notes",
        ItemType::Insight => "Insights",
    }
}

fn push_item(md: &mut String, item: &ContextItem) {
    md.push_str(&format!("### {}\n\n", escape_markdown_header(&item.id)));
    let body = serde_json::to_string_pretty(&item.content).unwrap_or_else(|_| "{}".to_string());
    md.push_str("```json\n");
    md.push_str(&body);
    md.push_str("\n```\n\n");
}

/// Escape markdown injection in headers.
fn escape_markdown_header(s: &str) -> String {
    s.replace('#', "\\#").replace('\n', " ").replace('\r', "")
}
