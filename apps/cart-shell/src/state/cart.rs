//! # Cart State
//!
//! Owns the one live cart and serializes access to it.
//!
//! ## Thread Safety
//! The cart engine has no locking of its own. The cart is wrapped in
//! `Arc<Mutex<T>>` here so that:
//! 1. Several callers may hold a handle to the same cart
//! 2. Only one of them mutates it at a time
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Command               CartState                 Engine call            │
//! │  ───────               ─────────                 ───────────            │
//! │                                                                         │
//! │  add ────────────────► with_cart_mut() ────────► add_product_to_cart   │
//! │  increment ──────────► with_cart_mut() ────────► increment_...         │
//! │  remove ─────────────► with_cart_mut() ────────► remove_product_...    │
//! │  reset ──────────────► with_cart_mut() ────────► reset                 │
//! │  get ────────────────► with_cart() ────────────► (read only)           │
//! │                                                                         │
//! │  NOTE: All operations acquire the Mutex lock exclusively.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartEngine, Product};

/// Serialized view of the cart returned by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub open: bool,
    pub products: Vec<Product>,
    pub item_count: usize,
    pub total_quantity: u64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            open: cart.open,
            products: cart.products.clone(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Shared, lock-protected cart plus the engine that mutates it.
///
/// ## Poisoning
/// A panic while the lock is held cannot leave a half-applied mutation
/// behind, because engine operations check everything before writing. A
/// poisoned lock is therefore recovered rather than propagated.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    engine: CartEngine,
}

impl CartState {
    /// Creates a new empty cart state using `engine`.
    pub fn new(engine: CartEngine) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            engine,
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// # use cart_shell::state::{CartResponse, CartState};
    /// # use storefront_core::CartEngine;
    /// let cart_state = CartState::new(CartEngine::new());
    /// let view = cart_state.with_cart(|c| CartResponse::from(c));
    /// assert_eq!(view.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart and the engine.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartEngine, &mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&self.engine, &mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new(CartEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use storefront_core::CartOperations;

    #[test]
    fn test_response_counts() {
        let state = CartState::default();
        state
            .with_cart_mut(|engine, cart| {
                engine.add_product_to_cart(cart, Product::new("1", "Mug", 850).with_quantity(3))?;
                engine.add_product_to_cart(cart, Product::new("2", "Cap", 1200))?;
                Ok::<(), storefront_core::CartError>(())
            })
            .unwrap();

        let view = state.with_cart(|c| CartResponse::from(c));
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total_quantity, 4);
        assert!(!view.open);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let view = CartResponse::from(&Cart::new());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["itemCount"], 0);
        assert_eq!(json["totalQuantity"], 0);
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::default();
        state
            .with_cart_mut(|engine, cart| {
                engine
                    .add_product_to_cart(cart, Product::new("1", "Mug", 850))
                    .map(|_| ())
            })
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    state.with_cart_mut(|engine, cart| {
                        engine.increment_product_quantity(cart, "1").map(|_| ())
                    })
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(state.with_cart(|c| c.products[0].quantity), 9);
    }
}
