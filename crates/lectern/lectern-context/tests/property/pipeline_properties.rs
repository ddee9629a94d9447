use std::collections::HashSet;

use lectern_context::pipeline::{prioritize, remove_duplicates, truncate_to_fit};
use lectern_core::models::{ContentMap, ContextItem, ItemType};
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = ContextItem> {
    (
        0u8..8,
        prop_oneof![Just(ItemType::Source), Just(ItemType::Note), Just(ItemType::Insight)],
        -5i64..5,
        0usize..40,
    )
        .prop_map(|(id, item_type, priority, tokens)| {
            ContextItem::with_token_count(format!("item:{id}"), item_type, ContentMap::new(), tokens)
                .with_priority(priority)
        })
}

proptest! {
    #[test]
    fn dedup_keeps_first_occurrence(items in prop::collection::vec(arb_item(), 0..30)) {
        let mut deduped = items.clone();
        let removed = remove_duplicates(&mut deduped);

        let mut seen = HashSet::new();
        let expected: Vec<ContextItem> = items
            .iter()
            .filter(|item| seen.insert(item.id.clone()))
            .cloned()
            .collect();
        prop_assert_eq!(removed, items.len() - expected.len());
        prop_assert_eq!(deduped, expected);
    }

    #[test]
    fn prioritize_is_stable_and_descending(items in prop::collection::vec(arb_item(), 0..30)) {
        let tagged: Vec<ContextItem> = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| ContextItem { id: format!("item:{i}"), ..item })
            .collect();
        let mut sorted = tagged.clone();
        prioritize(&mut sorted);

        let position = |id: &str| tagged.iter().position(|item| item.id == id).unwrap();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].priority >= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }

    #[test]
    fn truncation_respects_budget(items in prop::collection::vec(arb_item(), 0..30), budget in 0usize..200) {
        let mut kept = items.clone();
        truncate_to_fit(&mut kept, budget);
        let total: usize = kept.iter().map(|item| item.token_count).sum();
        prop_assert!(total <= budget);

        // Survivors keep their relative order.
        let mut cursor = items.iter();
        for item in &kept {
            prop_assert!(cursor.any(|candidate| candidate == item));
        }
    }

    #[test]
    fn truncation_is_idempotent(items in prop::collection::vec(arb_item(), 0..30), budget in 0usize..200) {
        let mut once = items;
        truncate_to_fit(&mut once, budget);
        let mut twice = once.clone();
        prop_assert_eq!(truncate_to_fit(&mut twice, budget), 0);
        prop_assert_eq!(twice, once);
    }
}
