/// Greedy token budgeting.
pub struct TokenBudget;

impl TokenBudget {
    /// How many tokens remain from a total budget after using `used`.
    pub fn remaining(total: usize, used: usize) -> usize {
        total.saturating_sub(used)
    }

    /// Whether `cost` more tokens fit on top of `used` within `budget`.
    pub fn fits(used: usize, cost: usize, budget: usize) -> bool {
        used.checked_add(cost).is_some_and(|total| total <= budget)
    }

    /// Select items greedily in the given order.
    ///
    /// An item is kept when it fits in what is left of the budget; an item
    /// that does not fit is skipped and the walk continues. Returns indices
    /// of kept items in ascending order.
    pub fn select(costs: &[usize], budget: usize) -> Vec<usize> {
        let mut used = 0usize;
        let mut kept = Vec::new();

        for (index, &cost) in costs.iter().enumerate() {
            if Self::fits(used, cost, budget) {
                used += cost;
                kept.push(index);
            }
        }

        kept
    }
}
