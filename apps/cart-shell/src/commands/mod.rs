//! # Commands Module
//!
//! Everything a host can ask of the cart.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── Cart manipulation
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Script (JSON)                                                          │
//! │  ─────────────                                                          │
//! │  [{ "op": "add", "product": {...} }, { "op": "increment", "id": "1" }]  │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  CartCommand ──► execute(&CartState, command)                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome<CartResponse> ──► one JSON line on stdout                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;

pub use cart::{execute, CartCommand};
