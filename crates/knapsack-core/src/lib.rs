//! # knapsack-core: Weighted Item Collections
//!
//! This crate provides [`Knapsack`], an in-memory collection of named,
//! weighted [`Item`]s, with weight filters and aggregate queries. It is pure
//! logic with zero I/O.
//!
//! ## Crate Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         knapsack-core                                   │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │  weight   │  │   types   │  │ knapsack  │  │ validation│           │
//! │   │  Weight   │  │   Item    │  │ Knapsack  │  │  opt-in   │           │
//! │   │  (grams)  │  │           │  │ Summary   │  │  checks   │           │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘           │
//! │                                                                         │
//! │   NO I/O • NO GLOBAL STATE • NO LOCKING                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`weight`] - Weight type with integer grams
//! - [`types`] - The `Item` value type
//! - [`knapsack`] - The `Knapsack` collection and its summary
//! - [`error`] - Error types for checked construction
//! - [`validation`] - Item field validation
//!
//! ## Design Principles
//!
//! 1. **Absent Is Not An Error**: `None` inputs are skipped and reported
//!    through a `bool`, never stored
//! 2. **Sentinels For Empty Aggregates**: the average of nothing is `-1.0`,
//!    the greatest of nothing is `None`
//! 3. **Integer Weights**: totals are exact; only the average is a float
//! 4. **Permissive By Default**: validation exists but is opt-in
//!
//! ## Example Usage
//!
//! ```rust
//! use knapsack_core::{Item, Knapsack};
//!
//! let mut knapsack = Knapsack::new();
//! knapsack.add(Some(Item::new("Pen", 15)));
//! knapsack.add(None); // ignored
//! knapsack.add(Some(Item::new("Letter", 20)));
//!
//! assert_eq!(knapsack.number_of_items(), 2);
//! assert_eq!(knapsack.total_weight_in_grammes(), 35);
//! assert_eq!(knapsack.to_string(), "[(Pen, 15g), (Letter, 20g)]");
//! ```
//!
//! ## Logging
//!
//! Mutations and selections emit `tracing` events at `trace`/`debug` level.
//! The crate never installs a subscriber.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod knapsack;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use knapsack::{Knapsack, KnapsackSummary};
pub use types::Item;
pub use weight::Weight;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Average weight reported by an empty knapsack.
pub const EMPTY_AVERAGE_SENTINEL: f64 = -1.0;

/// Maximum item name length accepted by [`Item::try_new`].
pub const MAX_ITEM_NAME_LEN: usize = 200;
