use lectern_tokens::{TokenBudget, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::new(100).unwrap();
        prop_assert_eq!(counter.count(&s), counter.count_cached(&s));
    }

    #[test]
    fn subadditivity(a in ".{0,100}", b in ".{0,100}") {
        let counter = TokenCounter::new(100).unwrap();
        let combined = format!("{}{}", a, b);
        let count_a = counter.count(&a);
        let count_b = counter.count(&b);
        let count_combined = counter.count(&combined);
        prop_assert!(
            count_combined <= count_a + count_b + 1,
            "subadditivity: {} <= {} + {} + 1",
            count_combined, count_a, count_b
        );
    }

    #[test]
    fn count_is_bounded_by_length(s in ".{1,100}") {
        let counter = TokenCounter::new(100).unwrap();
        prop_assert!(counter.count(&s) <= s.len() * 2 + 10);
    }

    #[test]
    fn selection_never_exceeds_budget(costs in prop::collection::vec(0usize..50, 0..40), budget in 0usize..200) {
        let kept = TokenBudget::select(&costs, budget);
        let total: usize = kept.iter().map(|&i| costs[i]).sum();
        prop_assert!(total <= budget);
    }

    #[test]
    fn selection_is_idempotent(costs in prop::collection::vec(0usize..50, 0..40), budget in 0usize..200) {
        let kept = TokenBudget::select(&costs, budget);
        let kept_costs: Vec<usize> = kept.iter().map(|&i| costs[i]).collect();
        let again = TokenBudget::select(&kept_costs, budget);
        prop_assert_eq!(again.len(), kept_costs.len());
    }
}
