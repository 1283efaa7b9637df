//! # kiosk-core: Pure Business Logic for the Hot Dog Kiosk
//!
//! This crate contains the order-construction and stock-consumption logic
//! of the kiosk. It has zero I/O dependencies: the console loop and the
//! order log live in other crates and call into this one.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hot Dog Kiosk Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kiosk-cli (console loop)                     │   │
//! │  │    Main menu ──► Order menu ──► Payment menu ──► Report        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │  hotdog   │  │   order   │  │  ledger   │  │   │
//! │  │   │Ingredient │  │  HotDog   │  │   Order   │  │SalesLedger│  │   │
//! │  │   │ Inventory │  │  Builder  │  │ Completed │  │SalesReport│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • SINGLE-THREADED              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kiosk-store (order log)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (minor units)
//! - [`inventory`] - Ingredients and the fixed stock table
//! - [`hotdog`] - The assembled product and its builder
//! - [`recipe`] - Standard recipes
//! - [`order`] - Orders, discounting and finalization
//! - [`payment`] - Cash/card settlement
//! - [`ledger`] - Running sales totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and business rule checks
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{HotDogBuilder, Inventory, Order, PaymentMethod, SalesLedger};
//!
//! let inventory = Inventory::with_default_stock();
//! let mut ledger = SalesLedger::new();
//!
//! let classic = HotDogBuilder::from_recipe(&inventory, "Classic").unwrap();
//! let mut order = Order::new();
//! order.add_hotdog(classic);
//!
//! let completed = order.finalize(PaymentMethod::Cash).unwrap();
//! ledger.record_order(&completed);
//!
//! assert_eq!(ledger.report().total_items, 1);
//! assert_eq!(inventory.lookup("bun").unwrap().quantity(), 49);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod hotdog;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod order;
pub mod payment;
pub mod recipe;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use hotdog::{HotDog, HotDogBuilder};
pub use inventory::{Ingredient, Inventory};
pub use ledger::{SalesLedger, SalesReport};
pub use money::Money;
pub use order::{CompletedOrder, Order};
pub use payment::{PaymentMethod, PaymentReceipt};
pub use recipe::{Recipe, STANDARD_RECIPES};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of hot dogs in one order from which the discount applies.
pub const DISCOUNT_THRESHOLD: usize = 3;

/// Order discount in basis points (1000 = 10%).
pub const DISCOUNT_BPS: u32 = 1000;

/// Units of every ingredient in the default stock table.
pub const DEFAULT_STOCK: u32 = 50;

/// Name given to hot dogs assembled from a free-form ingredient list.
pub const CUSTOM_HOTDOG_NAME: &str = "Custom";
