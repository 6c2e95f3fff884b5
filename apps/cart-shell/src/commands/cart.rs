//! # Cart Commands
//!
//! One command per cart operation, plus a read-only `get`.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add    ┌──────────┐  increment / decrement              │
//! │  │  Empty   │────────►│ Has items│◄──────────┐                          │
//! │  │  Cart    │         │          │───────────┘                          │
//! │  └──────────┘         └──────────┘                                      │
//! │       ▲                    │                                            │
//! │       │   remove (last) /  │                                            │
//! │       └── remove_all ──────┘                                            │
//! │       ▲                                                                 │
//! │       └── reset (also closes the panel)                                │
//! │                                                                         │
//! │  toggle_open flips visibility in any state                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! ```json
//! { "op": "add", "product": { "id": "1", "title": "Mug", "price": 850 } }
//! { "op": "increment", "id": "1" }
//! { "op": "remove_all" }
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::{CartError, CartOperations, Outcome, Product};
use tracing::{debug, warn};

use crate::state::{CartResponse, CartState};

/// A single cart command as read from a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CartCommand {
    /// Read the cart without changing it.
    Get,
    ToggleOpen,
    Add { product: Product },
    Increment { id: String },
    Decrement { id: String },
    Remove { id: String },
    RemoveAll,
    Reset,
}

impl CartCommand {
    /// Snake-case name of the command, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::Get => "get",
            CartCommand::ToggleOpen => "toggle_open",
            CartCommand::Add { .. } => "add",
            CartCommand::Increment { .. } => "increment",
            CartCommand::Decrement { .. } => "decrement",
            CartCommand::Remove { .. } => "remove",
            CartCommand::RemoveAll => "remove_all",
            CartCommand::Reset => "reset",
        }
    }
}

/// Runs one command against the cart.
///
/// ## Returns
/// `Outcome::ok` with the updated cart, or `Outcome::fail` with the reason.
/// The cart is unchanged whenever the outcome is a failure.
pub fn execute(state: &CartState, command: CartCommand) -> Outcome<CartResponse> {
    let name = command.name();
    let result = dispatch(state, command);

    if let Err(err) = &result {
        warn!(command = name, code = err.code(), error = %err, "cart command rejected");
    }

    Outcome::from(result)
}

fn dispatch(state: &CartState, command: CartCommand) -> Result<CartResponse, CartError> {
    match command {
        CartCommand::Get => {
            debug!("get command");
            Ok(state.with_cart(|c| CartResponse::from(c)))
        }
        CartCommand::ToggleOpen => {
            debug!("toggle_open command");
            state.with_cart_mut(|engine, cart| {
                engine.toggle_open(cart).map(|c| CartResponse::from(&*c))
            })
        }
        CartCommand::Add { product } => {
            debug!(product_id = %product.id, quantity = product.quantity, "add command");
            state.with_cart_mut(|engine, cart| {
                engine
                    .add_product_to_cart(cart, product)
                    .map(|c| CartResponse::from(&*c))
            })
        }
        CartCommand::Increment { id } => {
            debug!(product_id = %id, "increment command");
            state.with_cart_mut(|engine, cart| {
                engine
                    .increment_product_quantity(cart, &id)
                    .map(|c| CartResponse::from(&*c))
            })
        }
        CartCommand::Decrement { id } => {
            debug!(product_id = %id, "decrement command");
            state.with_cart_mut(|engine, cart| {
                engine
                    .decrement_product_quantity(cart, &id)
                    .map(|c| CartResponse::from(&*c))
            })
        }
        CartCommand::Remove { id } => {
            debug!(product_id = %id, "remove command");
            state.with_cart_mut(|engine, cart| {
                engine
                    .remove_product_from_cart(cart, &id)
                    .map(|c| CartResponse::from(&*c))
            })
        }
        CartCommand::RemoveAll => {
            debug!("remove_all command");
            state.with_cart_mut(|engine, cart| {
                engine.remove_all(cart).map(|c| CartResponse::from(&*c))
            })
        }
        CartCommand::Reset => {
            debug!("reset command");
            state.with_cart_mut(|engine, cart| {
                engine.reset(cart).map(|c| CartResponse::from(&*c))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CartEngine, CartLimits};

    fn add(id: &str) -> CartCommand {
        CartCommand::Add {
            product: Product::new(id, format!("Product {}", id), 1990),
        }
    }

    #[test]
    fn test_parse_commands() {
        let commands: Vec<CartCommand> = serde_json::from_str(
            r#"[
                {"op": "toggle_open"},
                {"op": "add", "product": {"id": "1", "title": "Mug", "price": 850}},
                {"op": "increment", "id": "1"},
                {"op": "remove_all"}
            ]"#,
        )
        .unwrap();

        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], CartCommand::ToggleOpen);
        assert_eq!(commands[1].name(), "add");
        assert_eq!(
            commands[2],
            CartCommand::Increment {
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let parsed = serde_json::from_str::<CartCommand>(r#"{"op": "checkout"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_execute_scenario() {
        let state = CartState::default();

        assert!(execute(&state, add("1")).is_ok());

        let outcome = execute(&state, CartCommand::Increment { id: "1".into() });
        assert_eq!(outcome.value().map(|v| v.products[0].quantity), Some(2));

        let outcome = execute(&state, CartCommand::Decrement { id: "1".into() });
        assert_eq!(outcome.value().map(|v| v.products[0].quantity), Some(1));

        let outcome = execute(&state, CartCommand::Decrement { id: "1".into() });
        assert!(outcome.is_failure());
        assert_eq!(
            outcome.message(),
            Some("Cannot decrement product quantity below 1")
        );
        assert!(outcome.value().is_none());

        let outcome = execute(&state, CartCommand::Remove { id: "1".into() });
        assert_eq!(outcome.value().map(|v| v.item_count), Some(0));
    }

    #[test]
    fn test_execute_duplicate_add() {
        let state = CartState::default();
        execute(&state, add("1"));

        let outcome = execute(&state, add("1"));

        assert!(outcome.is_failure());
        assert_eq!(outcome.message(), Some("Product id [1] already exists"));
        assert_eq!(state.with_cart(|c| c.item_count()), 1);
    }

    #[test]
    fn test_execute_missing_id() {
        let state = CartState::default();
        for command in [
            CartCommand::Increment { id: "9".into() },
            CartCommand::Decrement { id: "9".into() },
            CartCommand::Remove { id: "9".into() },
        ] {
            let outcome = execute(&state, command);
            assert_eq!(outcome.message(), Some("Product id [9] does not exist"));
        }
    }

    #[test]
    fn test_execute_honors_limits() {
        let state = CartState::new(CartEngine::with_limits(
            CartLimits::default().with_max_line_items(1),
        ));

        assert!(execute(&state, add("1")).is_ok());
        let outcome = execute(&state, add("2"));

        assert_eq!(outcome.message(), Some("Cart cannot have more than 1 items"));
    }

    #[test]
    fn test_toggle_and_reset() {
        let state = CartState::default();
        execute(&state, add("1"));

        let outcome = execute(&state, CartCommand::ToggleOpen);
        assert_eq!(outcome.value().map(|v| v.open), Some(true));

        let outcome = execute(&state, CartCommand::RemoveAll);
        assert_eq!(outcome.value().map(|v| (v.open, v.item_count)), Some((true, 0)));

        let outcome = execute(&state, CartCommand::Reset);
        assert_eq!(outcome.value().map(|v| (v.open, v.item_count)), Some((false, 0)));

        let outcome = execute(&state, CartCommand::Get);
        assert_eq!(outcome.into_value(), Some(CartResponse::from(&storefront_core::Cart::new())));
    }
}
