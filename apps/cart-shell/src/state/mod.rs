//! # State Module
//!
//! Host-side state for the cart shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │       ShellConfig        │        │          CartState           │  │
//! │  │                          │ limits │                              │  │
//! │  │  cart.max_line_items     │───────►│  Arc<Mutex<Cart>>            │  │
//! │  │  cart.max_item_quantity  │        │  CartEngine                  │  │
//! │  │  log_filter              │        │                              │  │
//! │  └──────────────────────────┘        └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ShellConfig: Read-only after initialization                         │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartResponse, CartState};
pub use config::{
    CartSettings, ShellConfig, ENV_LOG_FILTER, ENV_MAX_CART_ITEMS, ENV_MAX_ITEM_QUANTITY,
};
