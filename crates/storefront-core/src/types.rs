//! # Domain Types
//!
//! The passive data the cart engine works on.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐   ┌─────────────────┐  │
//! │  │      Cart       │        │     Product     │   │  ProductImage   │  │
//! │  │  ─────────────  │  0..n  │  ─────────────  │   │  ─────────────  │  │
//! │  │  open           │───────►│  id (key)       │──►│  url            │  │
//! │  │  products       │        │  title          │   │  alt            │  │
//! │  └─────────────────┘        │  price (minor)  │   └─────────────────┘  │
//! │                             │  discount       │                        │
//! │                             │  quantity ≥ 1   │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Only `Product::id` and `Product::quantity` mean anything to the engine.
//! Title, price, discount and image travel through untouched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product Image
// =============================================================================

/// Presentational image metadata for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductImage {
    pub url: String,
    pub alt: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product as it sits in the cart (one line item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier. The only key the engine matches on.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Price in minor currency units (cents).
    pub price: i64,

    /// Discount in minor currency units.
    #[serde(default)]
    pub discount: i64,

    /// How many of this product are in the cart. Never below 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Image shown next to the line item.
    #[serde(default)]
    pub img: ProductImage,
}

fn default_quantity() -> u32 {
    crate::MIN_ITEM_QUANTITY
}

impl Product {
    /// Creates a product with quantity 1, no discount and an empty image.
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: i64) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            price,
            discount: 0,
            quantity: default_quantity(),
            img: ProductImage::default(),
        }
    }

    /// Returns the product with the given quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Returns the product with the given image.
    pub fn with_image(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.img = ProductImage {
            url: url.into(),
            alt: alt.into(),
        };
        self
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line item per `id`
/// - Every line item has `quantity >= 1`
/// - `open` is a visibility flag only and never affects `products`
///
/// These hold because carts are only changed through
/// [`CartOperations`](crate::cart::CartOperations). The fields stay public so
/// hosts can render and serialize the cart directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Whether the cart panel is shown.
    pub open: bool,

    /// Line items in insertion order.
    pub products: Vec<Product>,
}

impl Cart {
    /// Creates a closed, empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Returns the line item with this id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns true if a line item with this id is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Returns the index of the line item with this id.
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Returns the number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.products.len()
    }

    /// Returns the sum of all line item quantities.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Checks if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_is_closed_and_empty() {
        let cart = Cart::new();
        assert!(!cart.open);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_product_defaults() {
        let product = Product::new("1", "testtitle1", 1990);
        assert_eq!(product.quantity, 1);
        assert_eq!(product.discount, 0);
        assert_eq!(product.img, ProductImage::default());
    }

    #[test]
    fn test_cart_lookup_by_id() {
        let cart = Cart {
            open: false,
            products: vec![
                Product::new("1", "a", 100).with_quantity(2),
                Product::new("2", "b", 200).with_quantity(3),
            ],
        };

        assert!(cart.contains("2"));
        assert!(!cart.contains("3"));
        assert_eq!(cart.find("1").map(|p| p.price), Some(100));
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id":"9","title":"Mug","price":850}"#).unwrap();
        assert_eq!(product.quantity, 1);
        assert_eq!(product.discount, 0);
        assert_eq!(product.img.url, "");
    }
}
