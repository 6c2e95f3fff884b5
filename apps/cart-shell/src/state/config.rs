//! # Shell Configuration
//!
//! Configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_MAX_CART_ITEMS=50                                       │
//! │     STOREFRONT_MAX_ITEM_QUANTITY=99                                    │
//! │     STOREFRONT_LOG=debug                                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/cart-shell/cart.toml (Linux)                             │
//! │     ~/Library/Application Support/com.storefront.cart-shell/cart.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     No limits, log filter "info,storefront=debug,cart_shell=debug"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cart.toml
//! log_filter = "info,cart_shell=debug"
//!
//! [cart]
//! max_line_items = 100
//! max_item_quantity = 999
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_core::CartLimits;
use tracing::{debug, info, warn};

use crate::error::{ShellError, ShellResult};

/// Overrides `cart.max_line_items`.
pub const ENV_MAX_CART_ITEMS: &str = "STOREFRONT_MAX_CART_ITEMS";

/// Overrides `cart.max_item_quantity`.
pub const ENV_MAX_ITEM_QUANTITY: &str = "STOREFRONT_MAX_ITEM_QUANTITY";

/// Overrides `log_filter`.
pub const ENV_LOG_FILTER: &str = "STOREFRONT_LOG";

const CONFIG_FILE_NAME: &str = "cart.toml";

// =============================================================================
// Cart Settings
// =============================================================================

/// Upper bounds applied by the cart engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSettings {
    /// Maximum distinct line items. Unset means unbounded.
    #[serde(default)]
    pub max_line_items: Option<usize>,

    /// Maximum quantity of one line item. Unset means unbounded.
    #[serde(default)]
    pub max_item_quantity: Option<u32>,
}

impl CartSettings {
    /// Converts to the engine's limit type.
    pub fn limits(&self) -> CartLimits {
        CartLimits {
            max_line_items: self.max_line_items,
            max_item_quantity: self.max_item_quantity,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Cart engine limits.
    #[serde(default)]
    pub cart: CartSettings,

    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "info,storefront=debug,cart_shell=debug".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            cart: CartSettings::default(),
            log_filter: default_log_filter(),
            source: None,
        }
    }
}

impl ShellConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`cart.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ShellResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`ShellConfig::load`], with overrides read through `lookup`
    /// instead of the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ShellResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shell config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
                config.source = Some(path);
            } else if explicit {
                return Err(ShellError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body.
    pub fn from_toml(contents: &str) -> ShellResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Platform config location, e.g. `~/.config/cart-shell/cart.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "storefront", "cart-shell")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ShellResult<()> {
        if self.cart.max_line_items == Some(0) {
            return Err(ShellError::Config(
                "cart.max_line_items must be greater than 0".into(),
            ));
        }

        if self.cart.max_item_quantity == Some(0) {
            return Err(ShellError::Config(
                "cart.max_item_quantity must be greater than 0".into(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ShellError::Config("log_filter must not be empty".into()));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// production). Unparseable numbers are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_CART_ITEMS) {
            match raw.trim().parse::<usize>() {
                Ok(max) => {
                    debug!(max, "Overriding max line items from environment");
                    self.cart.max_line_items = Some(max);
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_MAX_CART_ITEMS),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_ITEM_QUANTITY) {
            match raw.trim().parse::<u32>() {
                Ok(max) => {
                    debug!(max, "Overriding max item quantity from environment");
                    self.cart.max_item_quantity = Some(max);
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_MAX_ITEM_QUANTITY),
            }
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            self.log_filter = filter;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_have_no_limits() {
        let config = ShellConfig::default();
        assert_eq!(config.cart.limits(), CartLimits::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = ShellConfig::from_toml(
            r#"
            log_filter = "warn"

            [cart]
            max_line_items = 100
            max_item_quantity = 999
            "#,
        )
        .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.cart.max_line_items, Some(100));
        assert_eq!(config.cart.max_item_quantity, Some(999));
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let config = ShellConfig::from_toml("[cart]\nmax_item_quantity = 5\n").unwrap();
        assert_eq!(config.cart.max_line_items, None);
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = ShellConfig::from_toml("[cart]\nmax_line_items = 10\n").unwrap();

        config.apply_overrides(env(&[
            (ENV_MAX_CART_ITEMS, "3"),
            (ENV_MAX_ITEM_QUANTITY, "7"),
            (ENV_LOG_FILTER, "trace"),
        ]));

        assert_eq!(config.cart.max_line_items, Some(3));
        assert_eq!(config.cart.max_item_quantity, Some(7));
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_env_value_is_ignored() {
        let mut config = ShellConfig::default();
        config.apply_overrides(env(&[(ENV_MAX_CART_ITEMS, "lots")]));
        assert_eq!(config.cart.max_line_items, None);
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let mut config = ShellConfig::default();
        config.cart.max_line_items = Some(0);
        assert!(matches!(config.validate(), Err(ShellError::Config(_))));

        let mut config = ShellConfig::default();
        config.cart.max_item_quantity = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let path = std::env::temp_dir().join("cart-shell-does-not-exist.toml");
        assert!(matches!(
            ShellConfig::load_with(Some(path), env(&[])),
            Err(ShellError::Config(_))
        ));
    }

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cart-shell-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config("load", "[cart]\nmax_line_items = 4\n");

        let config = ShellConfig::load_with(Some(path.clone()), env(&[]));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.cart.max_line_items, Some(4));
        assert_eq!(config.cart.max_item_quantity, None);
    }

    #[test]
    fn test_load_applies_lookup_then_validates() {
        let path = temp_config("lookup", "[cart]\nmax_line_items = 4\n");

        let overridden = ShellConfig::load_with(
            Some(path.clone()),
            env(&[(ENV_MAX_ITEM_QUANTITY, "12")]),
        );
        let rejected =
            ShellConfig::load_with(Some(path.clone()), env(&[(ENV_MAX_CART_ITEMS, "0")]));
        std::fs::remove_file(&path).unwrap();

        let config = overridden.unwrap();
        assert_eq!(config.cart.max_line_items, Some(4));
        assert_eq!(config.cart.max_item_quantity, Some(12));
        assert!(matches!(rejected, Err(ShellError::Config(_))));
    }
}
