//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CartError        - Rejected cart mutations                        │
//! │  └── ValidationError  - Quantity rule failures                         │
//! │                                                                         │
//! │  cart-shell errors (host crate)                                        │
//! │  └── ShellError       - Config, IO and script parsing failures         │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → Outcome::fail → caller            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the product id in every message that concerns one item
//! 3. Errors are enum variants, never String
//! 4. None of these are faults: every one is a reportable domain failure

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// A cart mutation that was refused.
///
/// Whenever one of these is returned the cart is exactly as it was before
/// the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// A line item with this id is already in the cart.
    ///
    /// ## When This Occurs
    /// - The user clicks "Add to cart" twice on the same product
    /// - Two catalog entries share an id
    #[error("Product id [{0}] already exists")]
    DuplicateProduct(String),

    /// No line item with this id is in the cart.
    ///
    /// ## When This Occurs
    /// - The caller holds a product that was already removed
    /// - The cart was cleared or reset in between
    #[error("Product id [{0}] does not exist")]
    ProductNotFound(String),

    /// Decrement attempted on a line item already at the minimum quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: "T-Shirt" x1
    ///      │
    ///      ▼
    /// Click "−"
    ///      │
    ///      ▼
    /// QuantityFloor { id: "1" }
    ///      │
    ///      ▼
    /// UI keeps x1, offers "Remove" instead
    /// ```
    #[error("Cannot decrement product quantity below 1")]
    QuantityFloor { id: String },

    /// Cart already holds the configured maximum of distinct line items.
    #[error("Cart cannot have more than {max} items")]
    CartFull { max: usize },

    /// Quantity would exceed the configured maximum for one line item.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CartError {
    /// Stable machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            CartError::DuplicateProduct(_) => "DUPLICATE_ITEM",
            CartError::ProductNotFound(_) => "MISSING_ITEM",
            CartError::QuantityFloor { .. } => "QUANTITY_FLOOR",
            CartError::CartFull { .. } => "CART_FULL",
            CartError::QuantityTooLarge { .. } => "QUANTITY_TOO_LARGE",
            CartError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// The product id this failure concerns, if it concerns a single item.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            CartError::DuplicateProduct(id)
            | CartError::ProductNotFound(id)
            | CartError::QuantityFloor { id } => Some(id.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Numeric rule violations on quantities.
///
/// Ceilings are reported as [`CartError::QuantityTooLarge`] and
/// [`CartError::CartFull`], not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
