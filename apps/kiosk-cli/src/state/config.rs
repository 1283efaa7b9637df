//! # Configuration State
//!
//! Stores kiosk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KIOSK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

/// Default order log location, relative to the working directory.
pub const DEFAULT_ORDERS_LOG: &str = "orders.json";

/// Kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Store name (shown in the greeting)
    pub store_name: String,

    /// Where paid orders are appended
    pub orders_log_path: PathBuf,

    /// Print the missing-ingredient warning after each order
    pub low_stock_warnings: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Hot Dog Kiosk"
    /// - Log: `orders.json` in the working directory
    /// - Low stock warnings: enabled
    fn default() -> Self {
        ConfigState {
            store_name: "Hot Dog Kiosk".to_string(),
            orders_log_path: PathBuf::from(DEFAULT_ORDERS_LOG),
            low_stock_warnings: true,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIOSK_STORE_NAME`: Override store name
    /// - `KIOSK_ORDERS_LOG`: Override order log path
    /// - `KIOSK_LOW_STOCK_WARNINGS`: `0`/`false`/`off` disables the warning
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("KIOSK_STORE_NAME").filter(|s| !s.trim().is_empty()) {
            config.store_name = store_name;
        }

        if let Some(path) = lookup("KIOSK_ORDERS_LOG").filter(|s| !s.trim().is_empty()) {
            config.orders_log_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup("KIOSK_LOW_STOCK_WARNINGS") {
            config.low_stock_warnings = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        config
    }

    /// Welcome line printed once at startup.
    pub fn greeting(&self) -> String {
        format!("Welcome to {}!", self.store_name)
    }
}
