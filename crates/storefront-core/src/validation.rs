//! # Validation Module
//!
//! Numeric rules the cart engine checks before mutating anything.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (cart-shell)                                            │
//! │  ├── JSON shape (deserialization)                                      │
//! │  └── Config limits are sane (non-zero)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart Engine                                                  │
//! │  ├── Identity checks (duplicate / missing id)                          │
//! │  └── THIS MODULE: quantity bounds, cart size                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_quantity;
//! use storefront_core::CartLimits;
//!
//! let limits = CartLimits::default().with_max_item_quantity(10);
//!
//! assert!(validate_quantity(5, &limits).is_ok());
//! assert!(validate_quantity(0, &limits).is_err());
//! assert!(validate_quantity(11, &limits).is_err());
//! ```

use crate::cart::CartLimits;
use crate::error::{CartError, ValidationError};
use crate::MIN_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, CartError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed `limits.max_item_quantity`, when set
pub fn validate_quantity(qty: u64, limits: &CartLimits) -> ValidationResult<()> {
    if qty < u64::from(MIN_ITEM_QUANTITY) {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into());
    }

    let max = limits.max_item_quantity.unwrap_or(u32::MAX);
    if qty > u64::from(max) {
        return Err(CartError::QuantityTooLarge {
            requested: qty,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates there is room for one more distinct line item.
///
/// ## Rules
/// - Must stay within `limits.max_line_items`, when set
pub fn validate_cart_size(current_items: usize, limits: &CartLimits) -> ValidationResult<()> {
    match limits.max_line_items {
        Some(max) if current_items >= max => Err(CartError::CartFull { max }),
        _ => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity_unbounded() {
        let limits = CartLimits::default();
        assert!(validate_quantity(1, &limits).is_ok());
        assert!(validate_quantity(u64::from(u32::MAX), &limits).is_ok());

        assert!(matches!(
            validate_quantity(0, &limits),
            Err(CartError::Validation(ValidationError::MustBePositive { .. }))
        ));
        assert!(matches!(
            validate_quantity(u64::from(u32::MAX) + 1, &limits),
            Err(CartError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_quantity_with_ceiling() {
        let limits = CartLimits::default().with_max_item_quantity(999);
        assert!(validate_quantity(999, &limits).is_ok());
        assert_eq!(
            validate_quantity(1000, &limits),
            Err(CartError::QuantityTooLarge {
                requested: 1000,
                max: 999
            })
        );
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(10_000, &CartLimits::default()).is_ok());

        let limits = CartLimits::default().with_max_line_items(2);
        assert!(validate_cart_size(1, &limits).is_ok());
        assert_eq!(
            validate_cart_size(2, &limits),
            Err(CartError::CartFull { max: 2 })
        );
    }
}
