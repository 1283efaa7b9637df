//! # Hot Dog Kiosk Console Library
//!
//! Core library for the kiosk console application. `main.rs` only calls
//! [`run`]; the menu loop itself is reachable through [`run_session`] so it
//! can be driven by scripted input.
//!
//! ## Module Organization
//! ```text
//! kiosk_cli/
//! ├── lib.rs          ◄─── You are here (startup & session)
//! ├── console.rs      ◄─── Prompt/print over BufRead + Write
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── session.rs  ◄─── Kiosk: borrowed inventory, ledger, log
//! ├── commands/
//! │   ├── mod.rs      ◄─── Main menu
//! │   ├── order.rs    ◄─── Order sub-loop and payment
//! │   ├── inventory.rs◄─── Stock listing
//! │   └── report.rs   ◄─── Sales report and restock list
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kiosk_core::{Inventory, SalesLedger, SalesReport};
use kiosk_store::OrderLog;

use console::Console;
use error::AppResult;
use state::{ConfigState, Kiosk};

/// Runs the kiosk on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,kiosk=info, can be overridden with RUST_LOG         │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env() (KIOSK_STORE_NAME, KIOSK_ORDERS_LOG)      │
/// │                                                                         │
/// │  3. Build State ──────────────────────────────────────────────────────► │
/// │     • Inventory with the default stock                                  │
/// │     • Empty SalesLedger                                                 │
/// │     • OrderLog (file created if absent)                                 │
/// │                                                                         │
/// │  4. Menu Loop ────────────────────────────────────────────────────────► │
/// │     • Until "4. Exit" or end of input                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!("Starting Hot Dog Kiosk");

    let config = ConfigState::from_env();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = run_session(&config, stdin.lock(), stdout.lock())?;

    info!(
        orders = report.total_orders,
        items = report.total_items,
        revenue = %report.total_revenue,
        "Kiosk closed"
    );
    Ok(())
}

/// Builds the kiosk state from `config` and runs the menu loop over the
/// given input and output. Returns the final sales totals.
pub fn run_session<R: BufRead, W: Write>(
    config: &ConfigState,
    input: R,
    output: W,
) -> AppResult<SalesReport> {
    let log = OrderLog::open(&config.orders_log_path)?;
    let inventory = Inventory::with_default_stock();
    let mut ledger = SalesLedger::new();

    info!(
        ingredients = inventory.len(),
        log = %log.path().display(),
        "State initialized"
    );

    let mut console = Console::new(input, output);
    let mut kiosk = Kiosk::new(config, &inventory, &mut ledger, &log);
    commands::main_menu(&mut kiosk, &mut console)?;

    Ok(ledger.report())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=kiosk=trace` - Show trace for kiosk crates only
/// - Default: WARN, INFO for kiosk crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,kiosk=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Session Tests
// =============================================================================
