//! # kiosk-store: Order Log for the Hot Dog Kiosk
//!
//! Persists every paid order as one line of JSON.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hot Dog Kiosk Data Flow                          │
//! │                                                                         │
//! │  Console: order paid                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kiosk-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   CompletedOrder ──► Vec<OrderLogRecord> ──► one JSON line      │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  orders.json (append-only, created if absent)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Format
//! ```json
//! [{"name":"Classic","ingredients":["Bun","Sausage","Ketchup","Mustard"],"price":17000}]
//! ```
//! `price` is the hot dog price in minor units (kopecks), before any order
//! discount.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiosk_store::OrderLog;
//!
//! let log = OrderLog::open("orders.json")?;
//! log.append(&completed_order)?;
//! ```

pub mod error;
pub mod order_log;

pub use error::{StoreError, StoreResult};
pub use order_log::{OrderLog, OrderLogRecord};
