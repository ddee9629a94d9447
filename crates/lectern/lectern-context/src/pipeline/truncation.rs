//! Greedy budget truncation.

use lectern_core::models::ContextItem;
use lectern_tokens::TokenBudget;

/// Keep items, in their current order, while they fit in `budget`.
///
/// An item that would overflow the running total is dropped and the walk
/// continues, so a later cheaper item can still be kept. There is no
/// backtracking: a kept item is never swapped out for a better fit.
///
/// Returns the number of items removed.
pub fn truncate_to_fit(items: &mut Vec<ContextItem>, budget: usize) -> usize {
    let costs: Vec<usize> = items.iter().map(|item| item.token_count).collect();
    let mut keep = vec![false; items.len()];
    for index in TokenBudget::select(&costs, budget) {
        keep[index] = true;
    }

    let before = items.len();
    let mut position = 0;
    items.retain(|_| {
        let kept = keep[position];
        position += 1;
        kept
    });
    before - items.len()
}
