//! # State Module
//!
//! Everything the console loop needs, built once in [`crate::run`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  run()                                                                  │
//! │    ├── ConfigState::from_env()                                          │
//! │    ├── Inventory::with_default_stock()                                  │
//! │    ├── SalesLedger::new()                                               │
//! │    └── OrderLog::open(config.orders_log_path)                           │
//! │                              │                                          │
//! │                              ▼  borrowed                                │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Kiosk<'a>                                                      │   │
//! │  │    &ConfigState  &Inventory  &mut SalesLedger  &OrderLog        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Single-threaded: the inventory uses Rc/Cell and is !Send.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod session;

pub use config::ConfigState;
pub use session::Kiosk;
