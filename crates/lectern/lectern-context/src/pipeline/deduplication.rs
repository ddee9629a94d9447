//! Identity-based deduplication.

use std::collections::HashSet;

use lectern_core::models::ContextItem;

/// Drop every item whose id was already seen, keeping the first occurrence
/// in insertion order. Priority and token count play no part.
///
/// Returns the number of items removed.
pub fn remove_duplicates(items: &mut Vec<ContextItem>) -> usize {
    let before = items.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(item.id.clone()));
    before - items.len()
}
