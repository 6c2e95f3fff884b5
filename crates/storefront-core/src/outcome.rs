//! # Outcome
//!
//! A serializable success/failure carrier for crossing host boundaries.
//!
//! Inside Rust the engine speaks `Result<&mut Cart, CartError>`. Hosts that
//! hand results to something outside Rust (a UI, a script runner, a JSON
//! API) convert into an [`Outcome`], which always has the same shape:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  Success                 Failure              │
//! │  ───────                 ───────              │
//! │  ok:      true           ok:      false       │
//! │  message: null           message: "…"         │
//! │  value:   {cart}         value:   null        │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Callers check `ok` before reading `value`.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The result of one operation: a payload on success, a message on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Outcome<T> {
    ok: bool,
    message: Option<String>,
    value: Option<T>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying `value`.
    pub fn ok(value: T) -> Self {
        Outcome {
            ok: true,
            message: None,
            value: Some(value),
        }
    }

    /// A failed outcome carrying `message`.
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome {
            ok: false,
            message: Some(message.into()),
            value: None,
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.ok
    }

    /// Failure message, `None` on success.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Payload, `None` on failure.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Transforms the payload, keeping a failure as it is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            ok: self.ok,
            message: self.message,
            value: self.value.map(f),
        }
    }

    /// Converts back into a `Result`, with the message as the error.
    pub fn into_result(self) -> Result<T, String> {
        match (self.ok, self.value) {
            (true, Some(value)) => Ok(value),
            (_, _) => Err(self.message.unwrap_or_default()),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(err) => Outcome::fail(err.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
