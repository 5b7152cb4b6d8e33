//! # Weight Module
//!
//! Provides the `Weight` type for handling item weights safely.
//!
//! ## Why Integer Grams?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ONE UNIT, NO FRACTIONS                                                 │
//! │                                                                         │
//! │  Every weight in a knapsack is a whole number of grams:                │
//! │    (Soda, 400g) + (Water, 395g) = 795g                                  │
//! │                                                                         │
//! │  Sums are exact (clamped to the i64 range). Only the average is a      │
//! │  floating point value, computed from the integer total at the end.     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use knapsack_core::weight::Weight;
//!
//! let soda = Weight::from_grams(400);
//! let water = Weight::from_grams(395);
//!
//! let total = soda + water;
//! assert_eq!(total.grams(), 795);
//! assert_eq!(total.to_string(), "795g");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

// =============================================================================
// Weight Type
// =============================================================================

/// A weight measured in whole grams.
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative weights are not rejected; they are carried
///   through the arithmetic as given
/// - **Saturating addition**: sums clamp at `i64::MIN`/`i64::MAX` instead of
///   overflowing
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: serializes as a bare number of grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from grams.
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::weight::Weight;
    ///
    /// let pen = Weight::from_grams(15);
    /// assert_eq!(pen.grams(), 15);
    /// ```
    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Returns a zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Checks whether this weight stays within `max_grams` (inclusive).
    ///
    /// This is the predicate behind both weight filters on a knapsack.
    ///
    /// ## Example
    /// ```rust
    /// use knapsack_core::weight::Weight;
    ///
    /// assert!(Weight::from_grams(8).is_at_most(8));
    /// assert!(!Weight::from_grams(9).is_at_most(8));
    /// ```
    #[inline]
    pub const fn is_at_most(&self, max_grams: i64) -> bool {
        self.0 <= max_grams
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the weight with a trailing `g`, e.g. `15g`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::zero()
    }
}

/// Saturating: the result clamps at `i64::MIN`/`i64::MAX`.
impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0.saturating_add(other.0))
    }
}

/// Summing an empty iterator yields zero grams.
impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Weight>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
