//! # Cart Engine
//!
//! Every state transition a cart can go through.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Engine Operations                               │
//! │                                                                         │
//! │  Operation                     Checks first              Then           │
//! │  ─────────                     ────────────              ────           │
//! │  toggle_open                   -                         open = !open   │
//! │  add_product_to_cart           id not present, limits    push           │
//! │  increment_product_quantity    id present, ceiling       qty += 1       │
//! │  decrement_product_quantity    id present, qty > 1       qty -= 1       │
//! │  remove_product_from_cart      id present                remove         │
//! │  remove_all                    -                         clear products │
//! │  reset                         -                         closed + empty │
//! │                                                                         │
//! │  All checks run before any write, so an Err leaves the cart untouched.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale References
//! Callers often keep a `Product` around after it was removed or after the
//! cart was reset. The engine never trusts such a value: it only takes the id
//! from it and re-checks against the cart's current contents.

use crate::error::CartError;
use crate::types::{Cart, Product};
use crate::validation::{validate_cart_size, validate_quantity};
use crate::MIN_ITEM_QUANTITY;

/// Result of a cart operation: the same cart on success.
pub type CartResult<'a> = Result<&'a mut Cart, CartError>;

// =============================================================================
// Product Key
// =============================================================================

/// Anything that names a line item.
///
/// Lets callers pass either the product they hold or just its id.
pub trait ProductKey {
    fn product_key(&self) -> &str;
}

impl ProductKey for Product {
    fn product_key(&self) -> &str {
        &self.id
    }
}

impl ProductKey for str {
    fn product_key(&self) -> &str {
        self
    }
}

impl ProductKey for String {
    fn product_key(&self) -> &str {
        self.as_str()
    }
}

// =============================================================================
// Limits
// =============================================================================

/// Optional upper bounds on cart contents.
///
/// Both are unset by default, which leaves uniqueness and the floor of one as
/// the only rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartLimits {
    /// Maximum number of distinct line items.
    pub max_line_items: Option<usize>,

    /// Maximum quantity of a single line item.
    pub max_item_quantity: Option<u32>,
}

impl CartLimits {
    pub fn with_max_line_items(mut self, max: usize) -> Self {
        self.max_line_items = Some(max);
        self
    }

    pub fn with_max_item_quantity(mut self, max: u32) -> Self {
        self.max_item_quantity = Some(max);
        self
    }
}

// =============================================================================
// Operation Contract
// =============================================================================

/// The full set of cart mutations.
///
/// Each call performs exactly one mutation, in place, and hands back the same
/// cart. Failures are returned, never panicked, and never partially applied.
pub trait CartOperations {
    /// Flips the `open` flag. Never fails.
    fn toggle_open<'a>(&self, cart: &'a mut Cart) -> CartResult<'a>;

    /// Appends `product` as a new line item, keeping its quantity.
    fn add_product_to_cart<'a>(&self, cart: &'a mut Cart, product: Product) -> CartResult<'a>;

    /// Adds one to the quantity of the matching line item.
    fn increment_product_quantity<'a, K>(&self, cart: &'a mut Cart, product: &K) -> CartResult<'a>
    where
        K: ProductKey + ?Sized;

    /// Takes one from the quantity of the matching line item, stopping at 1.
    fn decrement_product_quantity<'a, K>(&self, cart: &'a mut Cart, product: &K) -> CartResult<'a>
    where
        K: ProductKey + ?Sized;

    /// Removes the matching line item, keeping the order of the rest.
    fn remove_product_from_cart<'a, K>(&self, cart: &'a mut Cart, product: &K) -> CartResult<'a>
    where
        K: ProductKey + ?Sized;

    /// Empties the cart without touching `open`. Never fails.
    fn remove_all<'a>(&self, cart: &'a mut Cart) -> CartResult<'a>;

    /// Returns the cart to its creation state. Never fails.
    fn reset<'a>(&self, cart: &'a mut Cart) -> CartResult<'a>;
}

// =============================================================================
// Engine
// =============================================================================

/// The standard [`CartOperations`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartEngine {
    limits: CartLimits,
}

impl CartEngine {
    /// Creates an engine with no upper limits.
    pub fn new() -> Self {
        CartEngine::default()
    }

    /// Creates an engine that enforces `limits`.
    pub fn with_limits(limits: CartLimits) -> Self {
        CartEngine { limits }
    }

    pub fn limits(&self) -> &CartLimits {
        &self.limits
    }
}

fn locate(cart: &Cart, id: &str) -> Result<usize, CartError> {
    cart.position(id)
        .ok_or_else(|| CartError::ProductNotFound(id.to_string()))
}

impl CartOperations for CartEngine {
    fn toggle_open<'a>(&self, cart: &'a mut Cart) -> CartResult<'a> {
        cart.open = !cart.open;
        Ok(cart)
    }

    fn add_product_to_cart<'a>(&self, cart: &'a mut Cart, product: Product) -> CartResult<'a> {
        if cart.contains(&product.id) {
            return Err(CartError::DuplicateProduct(product.id));
        }

        validate_quantity(u64::from(product.quantity), &self.limits)?;
        validate_cart_size(cart.item_count(), &self.limits)?;

        cart.products.push(product);
        Ok(cart)
    }

    fn increment_product_quantity<'a, K>(&self, cart: &'a mut Cart, product: &K) -> CartResult<'a>
    where
        K: ProductKey + ?Sized,
    {
        let index = locate(cart, product.product_key())?;
        let item = &mut cart.products[index];

        validate_quantity(u64::from(item.quantity) + 1, &self.limits)?;

        item.quantity += 1;
        Ok(cart)
    }

    fn decrement_product_quantity<'a, K>(&self, cart: &'a mut Cart, product: &K) -> CartResult<'a>
    where
        K: ProductKey + ?Sized,
    {
        let index = locate(cart, product.product_key())?;
        let item = &mut cart.products[index];

        if item.quantity <= MIN_ITEM_QUANTITY {
            return Err(CartError::QuantityFloor {
                id: item.id.clone(),
            });
        }

        item.quantity -= 1;
        Ok(cart)
    }

    fn remove_product_from_cart<'a, K>(&self, cart: &'a mut Cart, product: &K) -> CartResult<'a>
    where
        K: ProductKey + ?Sized,
    {
        let index = locate(cart, product.product_key())?;
        cart.products.remove(index);
        Ok(cart)
    }

    fn remove_all<'a>(&self, cart: &'a mut Cart) -> CartResult<'a> {
        cart.products.clear();
        Ok(cart)
    }

    fn reset<'a>(&self, cart: &'a mut Cart) -> CartResult<'a> {
        cart.open = false;
        cart.products.clear();
        Ok(cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
