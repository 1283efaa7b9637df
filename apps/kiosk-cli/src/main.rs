//! # Hot Dog Kiosk Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Load configuration from the environment
//! 3. Open the order log
//! 4. Build inventory and sales ledger
//! 5. Run the menu loop on stdin/stdout

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs so the loop can be driven from tests
    match kiosk_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
