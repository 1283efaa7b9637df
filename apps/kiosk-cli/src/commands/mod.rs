//! # Console Commands Module
//!
//! One function per main-menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (main menu, Flow)
//! ├── order.rs      ◄─── 1. Place an order
//! ├── inventory.rs  ◄─── 2. View inventory
//! └── report.rs     ◄─── 3. Sales report
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Command Flow                                 │
//! │                                                                         │
//! │  main_menu()                                                            │
//! │    │  prompt "Choose an action: "                                       │
//! │    ▼                                                                    │
//! │  fn take_order(                                                         │
//! │      kiosk: &mut Kiosk<'_>,       ◄── Borrowed session state            │
//! │      console: &mut Console<R, W>, ◄── Operator terminal                 │
//! │  ) -> AppResult<Flow>                                                   │
//! │    │                                                                    │
//! │    ├── Ok(Flow::Continue) ──► back to the main menu                     │
//! │    ├── Ok(Flow::Exit) ──────► input closed, session ends                │
//! │    └── Err(AppError) ───────► console I/O failed, session ends          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod inventory;
pub mod order;
pub mod report;

use std::io::{BufRead, Write};
use tracing::info;

use crate::console::Console;
use crate::error::AppResult;
use crate::state::Kiosk;

/// Shown for any selection that is not on the current menu.
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";

/// Printed when the operator leaves through the menu.
pub const FAREWELL: &str = "Thank you for your order!";

/// What the loop should do after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Input is exhausted or the operator chose to leave.
    Exit,
}

/// Runs the main menu until the operator exits or input ends.
pub fn main_menu<R: BufRead, W: Write>(
    kiosk: &mut Kiosk<'_>,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    console.say(kiosk.config().greeting())?;

    loop {
        console.blank()?;
        console.say("Menu:")?;
        console.say("1. Place an order")?;
        console.say("2. View inventory")?;
        console.say("3. Sales report")?;
        console.say("4. Exit")?;

        let Some(choice) = console.prompt("Choose an action: ")? else {
            info!("Input closed, shutting down");
            return Ok(());
        };

        let flow = match choice.as_str() {
            "1" => order::take_order(kiosk, console)?,
            "2" => inventory::show_inventory(kiosk, console)?,
            "3" => report::show_report(kiosk, console)?,
            "4" => {
                console.say(FAREWELL)?;
                Flow::Exit
            }
            _ => {
                console.say(INVALID_CHOICE)?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

/// `", "`-joined list for warning lines.
pub(crate) fn join_ids(ids: &[&str]) -> String {
    ids.join(", ")
}
