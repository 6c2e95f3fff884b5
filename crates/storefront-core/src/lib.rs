//! # storefront-core: Pure Cart Logic for Storefront
//!
//! This crate is the **heart** of Storefront. It owns the shopping cart and
//! every rule about how the cart may change, as plain functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host (cart-shell, UI, server)                   │   │
//! │  │    config ──► logging ──► CartState ──► commands                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Cart                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  outcome  │  │ validation│  │   │
//! │  │   │  Product  │  │CartEngine │  │ Outcome<T>│  │  quantity │  │   │
//! │  │   │   Cart    │  │ CartLimits│  │           │  │  cart size│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKING • NO PRICING • PURE STATE TRANSITIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Cart, Product, ProductImage)
//! - [`cart`] - The cart engine and its operation contract
//! - [`outcome`] - Flag/message/value carrier for host boundaries
//! - [`error`] - Domain error types
//! - [`validation`] - Quantity and cart size rules
//!
//! ## Design Principles
//!
//! 1. **Atomic Failures**: A rejected operation never changes the cart
//! 2. **Identity by Id**: Line items are matched by `id`, never by reference
//! 3. **Floor of One**: Removal, not a zero quantity, takes an item out
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, CartEngine, CartOperations, Product};
//!
//! let engine = CartEngine::new();
//! let mut cart = Cart::new();
//! let shirt = Product::new("1", "T-Shirt", 1990);
//!
//! engine.add_product_to_cart(&mut cart, shirt.clone()).unwrap();
//! engine.increment_product_quantity(&mut cart, &shirt).unwrap();
//! assert_eq!(cart.find("1").map(|p| p.quantity), Some(2));
//!
//! // Adding the same id again is rejected and the cart is untouched
//! assert!(engine.add_product_to_cart(&mut cart, shirt).is_err());
//! assert_eq!(cart.item_count(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod outcome;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Cart` instead of
// `use storefront_core::types::Cart`

pub use cart::{CartEngine, CartLimits, CartOperations, CartResult, ProductKey};
pub use error::{CartError, ValidationError};
pub use outcome::Outcome;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest quantity a line item may hold while it is in the cart.
///
/// ## Business Reason
/// Decrementing stops here. Taking a product out of the cart is always an
/// explicit removal, so a zero-quantity line item is never observable.
pub const MIN_ITEM_QUANTITY: u32 = 1;
