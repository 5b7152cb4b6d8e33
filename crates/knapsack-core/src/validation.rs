//! # Validation Module
//!
//! Opt-in checks for item fields.
//!
//! A [`Knapsack`](crate::knapsack::Knapsack) accepts any item it is given,
//! including blank names and negative weights. These validators back
//! [`Item::try_new`](crate::types::Item::try_new) for callers that want to
//! reject such input before it reaches a knapsack.
//!
//! ## Usage
//! ```rust
//! use knapsack_core::validation::{validate_item_name, validate_weight_grams};
//!
//! assert!(validate_item_name("Water").is_ok());
//! assert!(validate_weight_grams(395).is_ok());
//! assert!(validate_weight_grams(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use knapsack_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Letter").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// assert!(validate_item_name(&"A".repeat(300)).is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a weight in grams.
///
/// Zero is allowed (weightless items such as a voucher).
pub fn validate_weight_grams(grams: i64) -> ValidationResult<()> {
    if grams < 0 {
        return Err(ValidationError::Negative {
            field: "weight".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Soda").is_ok());
        assert!(validate_item_name("Mineral Water 1.5l").is_ok());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN)).is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_item_name_counts_chars_not_bytes() {
        // 200 two-byte characters
        let name = "ä".repeat(MAX_ITEM_NAME_LEN);
        assert!(validate_item_name(&name).is_ok());
    }

    #[test]
    fn test_validate_weight_grams() {
        assert!(validate_weight_grams(0).is_ok());
        assert!(validate_weight_grams(400).is_ok());
        assert!(validate_weight_grams(i64::MAX).is_ok());

        assert!(matches!(
            validate_weight_grams(-1),
            Err(ValidationError::Negative { .. })
        ));
    }
}
