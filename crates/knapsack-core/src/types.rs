//! # Domain Types
//!
//! The `Item` value stored by a [`Knapsack`](crate::knapsack::Knapsack).
//!
//! ## Shape
//! ```text
//! ┌─────────────────┐
//! │      Item       │
//! │  ─────────────  │
//! │  name           │   "Pen"
//! │  weight (grams) │   15
//! └─────────────────┘
//!  Display: (Pen, 15g)
//! ```
//!
//! Items are immutable once built: both fields are private and only exposed
//! through read accessors.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::CoreResult;
use crate::validation::{validate_item_name, validate_weight_grams};
use crate::weight::Weight;

// =============================================================================
// Item
// =============================================================================

/// A named item with a weight in grams.
///
/// ## Ordering
/// Items are ordered by weight ascending. Two items of equal weight are
/// ordered by name so that `Ord` agrees with `Eq`; callers should treat the
/// order among equally heavy items as unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    weight: Weight,
}

impl Item {
    /// Creates an item. No validation is performed.
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::Item;
    ///
    /// let pen = Item::new("Pen", 15);
    /// assert_eq!(pen.name(), "Pen");
    /// assert_eq!(pen.weight_in_grammes(), 15);
    ///
    /// // Negative weights are carried as given.
    /// let odd = Item::new("Balloon", -2);
    /// assert_eq!(odd.weight_in_grammes(), -2);
    /// ```
    pub fn new(name: impl Into<String>, weight_in_grammes: i64) -> Self {
        Item {
            name: name.into(),
            weight: Weight::from_grams(weight_in_grammes),
        }
    }

    /// Creates an item after validating its name and weight.
    ///
    /// ## Rules
    /// - Name must not be blank and must be at most
    ///   [`MAX_ITEM_NAME_LEN`](crate::MAX_ITEM_NAME_LEN) characters
    /// - Weight must not be negative
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::Item;
    ///
    /// assert!(Item::try_new("Letter", 20).is_ok());
    /// assert!(Item::try_new("", 20).is_err());
    /// assert!(Item::try_new("Letter", -1).is_err());
    /// ```
    pub fn try_new(name: impl Into<String>, weight_in_grammes: i64) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_weight_grams(weight_in_grammes)?;
        Ok(Item::new(name, weight_in_grammes))
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the weight.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the weight in grams.
    #[inline]
    pub fn weight_in_grammes(&self) -> i64 {
        self.weight.grams()
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders as `(name, <weight>g)`, e.g. `(Pen, 15g)`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.weight)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_item_accessors() {
        let item = Item::new("Soda", 400);
        assert_eq!(item.name(), "Soda");
        assert_eq!(item.weight(), Weight::from_grams(400));
        assert_eq!(item.weight_in_grammes(), 400);
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::new("Pen", 15).to_string(), "(Pen, 15g)");
        assert_eq!(Item::new("Feather", 0).to_string(), "(Feather, 0g)");
    }

    #[test]
    fn test_item_orders_by_weight() {
        let light = Item::new("Zinc", 10);
        let heavy = Item::new("Apple", 20);
        assert!(light < heavy);
        assert_eq!(
            vec![heavy.clone(), light.clone()].into_iter().max(),
            Some(heavy)
        );
    }

    #[test]
    fn test_item_ordering_agrees_with_eq() {
        let a = Item::new("Pen", 15);
        let b = Item::new("Pen", 15);
        let c = Item::new("Cap", 15);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn test_try_new_rejects_blank_name() {
        let err = Item::try_new("   ", 10).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_try_new_rejects_negative_weight() {
        let err = Item::try_new("Balloon", -2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { ref field }) if field == "weight"
        ));
        assert_eq!(
            err.to_string(),
            "Validation error: weight must not be negative"
        );
    }

    #[test]
    fn test_item_serializes_weight_as_grams() {
        let json = serde_json::to_value(Item::new("Pen", 15)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Pen", "weight": 15 }));
    }
}
