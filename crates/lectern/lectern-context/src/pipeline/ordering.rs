//! Priority ordering.

use lectern_core::models::ContextItem;

/// Sort by priority, highest first. The sort is stable: items with equal
/// priority keep their insertion order.
pub fn prioritize(items: &mut [ContextItem]) {
    items.sort_by(|a, b| b.priority.cmp(&a.priority));
}
