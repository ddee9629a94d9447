use lectern_core::models::{
    ContextItem, ContextMetadata, ContextResponse, ItemType, ResponseConfig,
};

use crate::params::ContextParams;

/// Group items into their type buckets and total them up.
///
/// Pure: reads `items` and `params` only. Item order inside each bucket is
/// the order of `items`.
pub fn format_response(items: &[ContextItem], params: &ContextParams) -> ContextResponse {
    let mut response = ContextResponse {
        notebook_id: params.notebook_id.clone(),
        source_id: params.source_id.clone(),
        ..ContextResponse::default()
    };

    for item in items {
        let bucket = match item.item_type {
            ItemType::Source => &mut response.sources,
            ItemType::Note => &mut response.notes,
            ItemType::Insight => &mut response.insights,
        };
        bucket.push(item.clone());
    }

    response.total_tokens = items.iter().map(|item| item.token_count).sum();
    response.total_items = items.len();
    response.metadata = ContextMetadata {
        source_count: response.sources.len(),
        note_count: response.notes.len(),
        insight_count: response.insights.len(),
        config: ResponseConfig {
            include_insights: params.include_insights,
            include_notes: params.include_notes,
            max_tokens: params.max_tokens,
        },
    };

    response
}
