//! # Knapsack
//!
//! An ordered multiset of [`Item`]s with weight filters and aggregate
//! queries.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Knapsack Operations                                  │
//! │                                                                         │
//! │  Caller Input              Operation                 Storage Change     │
//! │  ────────────              ─────────                 ──────────────     │
//! │                                                                         │
//! │  Some(item) ─────────────► add() ──────────────────► items.push(item)   │
//! │  None ───────────────────► add() ──────────────────► (unchanged)        │
//! │                                                                         │
//! │  &[Option<Item>] ────────► add_all() ──────────────► push each Some     │
//! │                                                                         │
//! │  max grams ──────────────► keep_only_items_with() ─► items.retain(..)   │
//! │                                                                         │
//! │  max grams ──────────────► make_new_knapsack_with() ► (new knapsack)    │
//! │                                                                         │
//! │  (none) ─────────────────► reset() ────────────────► items.clear()      │
//! │                                                                         │
//! │  NOTE: Absent items are filtered at the boundary, so storage is a      │
//! │        plain Vec<Item> and no query ever checks for missing entries.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unspecified Ties
//! [`Knapsack::greatest_item`] and [`Knapsack::heaviest_knapsack`] return one
//! of several equally heavy candidates. Which one is not part of the
//! contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::types::Item;
use crate::weight::Weight;
use crate::EMPTY_AVERAGE_SENTINEL;

// =============================================================================
// Knapsack
// =============================================================================

/// A collection of items.
///
/// ## Invariants
/// - Items keep their insertion order; duplicates are allowed
/// - No absent entry is ever stored
/// - The knapsack owns its items; constructing from a slice clones them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Knapsack {
    items: Vec<Item>,
}

impl Knapsack {
    /// Creates a new empty knapsack.
    pub fn new() -> Self {
        Knapsack { items: Vec::new() }
    }

    /// Creates a knapsack holding the present entries of `items`, in order.
    ///
    /// The slice is only read; changing it afterwards does not affect the
    /// knapsack.
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::{Item, Knapsack};
    ///
    /// let pen = Item::new("Pen", 15);
    /// let knapsack = Knapsack::from_items(&[Some(pen.clone()), None, Some(pen)]);
    /// assert_eq!(knapsack.number_of_items(), 2);
    /// ```
    pub fn from_items(items: &[Option<Item>]) -> Self {
        items.iter().cloned().collect()
    }

    // -------------------------------------------------------------------------
    // Modifiers
    // -------------------------------------------------------------------------

    /// Appends `item` if present.
    ///
    /// ## Returns
    /// - `true` if the item was appended
    /// - `false` if `item` was `None`; the knapsack is unchanged
    pub fn add(&mut self, item: Option<Item>) -> bool {
        match item {
            Some(item) => {
                trace!(item = %item, "item added");
                self.items.push(item);
                true
            }
            None => {
                trace!("absent item ignored");
                false
            }
        }
    }

    /// Appends every present entry of `items`, in order.
    ///
    /// Returns `true` if at least one entry was present.
    pub fn add_all(&mut self, items: &[Option<Item>]) -> bool {
        let mut added_any = false;
        for item in items {
            added_any |= self.add(item.clone());
        }
        added_any
    }

    /// Removes every item.
    pub fn reset(&mut self) {
        debug!(removed = self.items.len(), "knapsack reset");
        self.items.clear();
    }

    /// Keeps exactly the items weighing at most `max_item_weight_in_grammes`.
    ///
    /// Retained items keep their relative order.
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::{Item, Knapsack};
    ///
    /// let mut knapsack: Knapsack = vec![
    ///     Item::new("Book", 10),
    ///     Item::new("Laptop", 20),
    ///     Item::new("Pen", 5),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// knapsack.keep_only_items_with(8);
    /// assert_eq!(knapsack.to_string(), "[(Pen, 5g)]");
    /// ```
    pub fn keep_only_items_with(&mut self, max_item_weight_in_grammes: i64) {
        let before = self.items.len();
        self.items
            .retain(|item| item.weight().is_at_most(max_item_weight_in_grammes));
        debug!(
            max_grams = max_item_weight_in_grammes,
            kept = self.items.len(),
            removed = before - self.items.len(),
            "filtered knapsack in place"
        );
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the number of items.
    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    /// Checks if the knapsack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the stored items in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns an iterator over the stored items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Returns the total weight of all items.
    pub fn total_weight(&self) -> Weight {
        self.items.iter().map(Item::weight).sum()
    }

    /// Returns the total weight in grams; 0 when empty.
    pub fn total_weight_in_grammes(&self) -> i64 {
        self.total_weight().grams()
    }

    /// Returns the average item weight in grams.
    ///
    /// For an empty knapsack this is [`EMPTY_AVERAGE_SENTINEL`] (`-1.0`).
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::{Item, Knapsack};
    ///
    /// let knapsack = Knapsack::from_items(&[
    ///     Some(Item::new("Soda", 400)),
    ///     Some(Item::new("Water", 395)),
    /// ]);
    /// assert_eq!(knapsack.average_weight_in_grammes(), 397.5);
    /// assert_eq!(Knapsack::new().average_weight_in_grammes(), -1.0);
    /// ```
    pub fn average_weight_in_grammes(&self) -> f64 {
        if self.items.is_empty() {
            return EMPTY_AVERAGE_SENTINEL;
        }
        self.total_weight_in_grammes() as f64 / self.items.len() as f64
    }

    /// Returns an item of maximal weight, or `None` when empty.
    pub fn greatest_item(&self) -> Option<&Item> {
        self.items.iter().max_by_key(|item| item.weight())
    }

    /// Returns a new knapsack with the items weighing at most
    /// `max_item_weight_in_grammes`. `self` is not modified.
    pub fn make_new_knapsack_with(&self, max_item_weight_in_grammes: i64) -> Knapsack {
        let subset = Knapsack {
            items: self
                .items
                .iter()
                .filter(|item| item.weight().is_at_most(max_item_weight_in_grammes))
                .cloned()
                .collect(),
        };
        debug!(
            max_grams = max_item_weight_in_grammes,
            selected = subset.items.len(),
            of = self.items.len(),
            "derived filtered knapsack"
        );
        subset
    }

    /// Returns an aggregate snapshot of this knapsack.
    pub fn summary(&self) -> KnapsackSummary {
        KnapsackSummary::from(self)
    }

    // -------------------------------------------------------------------------
    // Class-level queries
    // -------------------------------------------------------------------------

    /// Returns one of the present knapsacks with the highest total weight.
    ///
    /// `None` entries are skipped. Returns `None` if no entry is present.
    /// Among knapsacks with equal totals any one may be returned.
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::{Item, Knapsack};
    ///
    /// let light = Knapsack::from_items(&[Some(Item::new("Tent", 3000))]);
    /// let heavy = Knapsack::from_items(&[Some(Item::new("Stove", 4000))]);
    ///
    /// let winner = Knapsack::heaviest_knapsack(&[Some(&light), None, Some(&heavy)]);
    /// assert!(std::ptr::eq(winner.unwrap(), &heavy));
    /// ```
    pub fn heaviest_knapsack<'a>(knapsacks: &[Option<&'a Knapsack>]) -> Option<&'a Knapsack> {
        let mut heaviest: Option<(&'a Knapsack, i64)> = None;

        for knapsack in knapsacks.iter().flatten().copied() {
            let total = knapsack.total_weight_in_grammes();
            match heaviest {
                Some((_, best)) if total <= best => {}
                _ => heaviest = Some((knapsack, total)),
            }
        }

        debug!(
            candidates = knapsacks.len(),
            heaviest_grams = heaviest.map(|(_, total)| total),
            "selected heaviest knapsack"
        );
        heaviest.map(|(knapsack, _)| knapsack)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `[(Pen, 15g), (Letter, 20g)]` in storage order; `[]` when
/// empty.
impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl Extend<Option<Item>> for Knapsack {
    fn extend<I: IntoIterator<Item = Option<Item>>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl Extend<Item> for Knapsack {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(Some));
    }
}

impl FromIterator<Option<Item>> for Knapsack {
    fn from_iter<I: IntoIterator<Item = Option<Item>>>(iter: I) -> Self {
        let mut knapsack = Knapsack::new();
        knapsack.extend(iter);
        knapsack
    }
}

impl FromIterator<Item> for Knapsack {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        iter.into_iter().map(Some).collect()
    }
}

impl<'a> IntoIterator for &'a Knapsack {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Knapsack {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// =============================================================================
// Knapsack Summary
// =============================================================================

/// Aggregate snapshot of a knapsack, ready to hand to a serializer.
///
/// Unlike [`Knapsack::average_weight_in_grammes`], the average of an empty
/// knapsack is `None` here rather than the `-1.0` sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnapsackSummary {
    pub item_count: usize,
    pub total_weight_grams: i64,
    pub average_weight_grams: Option<f64>,
    pub greatest_item: Option<Item>,
}

impl From<&Knapsack> for KnapsackSummary {
    fn from(knapsack: &Knapsack) -> Self {
        KnapsackSummary {
            item_count: knapsack.number_of_items(),
            total_weight_grams: knapsack.total_weight_in_grammes(),
            average_weight_grams: (!knapsack.is_empty())
                .then(|| knapsack.average_weight_in_grammes()),
            greatest_item: knapsack.greatest_item().cloned(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
