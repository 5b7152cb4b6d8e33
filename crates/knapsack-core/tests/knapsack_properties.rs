//! Property-based tests for `Knapsack`.
//!
//! These check the collection invariants over generated item lists, with
//! absent entries mixed in:
//!
//! - item count tracks successful adds
//! - average is total / count, or -1.0 when empty
//! - greatest item outweighs every stored item
//! - both weight filters keep exactly the items at or below the limit
//! - the heaviest knapsack has the maximal total, wherever it sits
//!
//! Case count follows `PROPTEST_CASES` when set (default: 64).

use knapsack_core::{Item, Knapsack};
use proptest::prelude::*;
use std::env;

const DEFAULT_PROPTEST_CASES: u32 = 64;

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);
    ProptestConfig::with_cases(cases)
}

fn arb_item() -> impl Strategy<Value = Item> {
    ("[A-Za-z]{1,8}", -1_000i64..10_000).prop_map(|(name, grams)| Item::new(name, grams))
}

fn arb_maybe_item() -> impl Strategy<Value = Option<Item>> {
    prop::option::weighted(0.8, arb_item())
}

fn arb_entries() -> impl Strategy<Value = Vec<Option<Item>>> {
    prop::collection::vec(arb_maybe_item(), 0..32)
}

fn weights(knapsack: &Knapsack) -> Vec<i64> {
    knapsack.iter().map(Item::weight_in_grammes).collect()
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn count_tracks_successful_adds(entries in arb_entries(), reset_at in 0usize..32) {
        let mut knapsack = Knapsack::new();
        let mut successful = 0usize;

        for (index, entry) in entries.into_iter().enumerate() {
            if index == reset_at {
                knapsack.reset();
                successful = 0;
            }
            if knapsack.add(entry) {
                successful += 1;
            }
        }

        prop_assert_eq!(knapsack.number_of_items(), successful);
    }

    #[test]
    fn from_items_keeps_present_entries_in_order(entries in arb_entries()) {
        let knapsack = Knapsack::from_items(&entries);
        let expected: Vec<Item> = entries.into_iter().flatten().collect();
        prop_assert_eq!(knapsack.items(), expected.as_slice());
    }

    #[test]
    fn add_all_reports_any_present(entries in arb_entries()) {
        let mut knapsack = Knapsack::new();
        let any_present = entries.iter().any(Option::is_some);
        prop_assert_eq!(knapsack.add_all(&entries), any_present);
    }

    #[test]
    fn average_is_total_over_count(entries in arb_entries()) {
        let knapsack = Knapsack::from_items(&entries);
        let average = knapsack.average_weight_in_grammes();

        if knapsack.is_empty() {
            prop_assert_eq!(average, -1.0);
        } else {
            let expected =
                knapsack.total_weight_in_grammes() as f64 / knapsack.number_of_items() as f64;
            prop_assert_eq!(average, expected);
        }
    }

    #[test]
    fn greatest_item_outweighs_all(entries in arb_entries()) {
        let knapsack = Knapsack::from_items(&entries);

        match knapsack.greatest_item() {
            None => prop_assert!(knapsack.is_empty()),
            Some(greatest) => {
                for item in &knapsack {
                    prop_assert!(greatest.weight_in_grammes() >= item.weight_in_grammes());
                }
            }
        }
    }

    #[test]
    fn filters_keep_exactly_light_items(entries in arb_entries(), max in -1_000i64..10_000) {
        let mut knapsack = Knapsack::from_items(&entries);
        let before = weights(&knapsack);
        let expected: Vec<i64> = before.iter().copied().filter(|&w| w <= max).collect();

        let derived = knapsack.make_new_knapsack_with(max);
        prop_assert_eq!(weights(&derived), expected.clone());
        prop_assert_eq!(weights(&knapsack), before);

        knapsack.keep_only_items_with(max);
        prop_assert_eq!(weights(&knapsack), expected);
        prop_assert_eq!(knapsack, derived);
    }

    #[test]
    fn heaviest_knapsack_has_maximal_total(
        groups in prop::collection::vec(prop::option::of(arb_entries()), 0..8)
    ) {
        let knapsacks: Vec<Option<Knapsack>> = groups
            .iter()
            .map(|group| group.as_deref().map(Knapsack::from_items))
            .collect();
        let candidates: Vec<Option<&Knapsack>> = knapsacks.iter().map(Option::as_ref).collect();

        let max_total = candidates
            .iter()
            .flatten()
            .map(|k| k.total_weight_in_grammes())
            .max();

        match Knapsack::heaviest_knapsack(&candidates) {
            None => prop_assert!(max_total.is_none()),
            Some(heaviest) => {
                prop_assert!(candidates.iter().flatten().any(|k| std::ptr::eq(*k, heaviest)));
                prop_assert_eq!(Some(heaviest.total_weight_in_grammes()), max_total);
            }
        }
    }

    #[test]
    fn rendering_lists_items_in_storage_order(entries in arb_entries()) {
        let knapsack = Knapsack::from_items(&entries);
        let rendered: Vec<String> = knapsack
            .iter()
            .map(|item| format!("({}, {}g)", item.name(), item.weight_in_grammes()))
            .collect();
        prop_assert_eq!(knapsack.to_string(), format!("[{}]", rendered.join(", ")));
    }
}

#[test]
fn keep_only_items_with_regression_for_shifted_slot() {
    let mut knapsack = Knapsack::from_items(&[
        Some(Item::new("Book", 10)),
        Some(Item::new("Laptop", 20)),
        Some(Item::new("Pen", 5)),
    ]);
    knapsack.keep_only_items_with(8);
    assert_eq!(knapsack.to_string(), "[(Pen, 5g)]");
}

#[test]
fn heaviest_knapsack_regression_for_first_entry() {
    let first = Knapsack::from_items(&[Some(Item::new("Tent", 4000))]);
    let second = Knapsack::from_items(&[Some(Item::new("Stove", 3000))]);

    let heaviest = Knapsack::heaviest_knapsack(&[Some(&first), Some(&second)]);
    assert!(std::ptr::eq(heaviest.unwrap(), &first));
}
