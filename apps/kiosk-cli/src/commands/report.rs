//! # Sales Report Command
//!
//! Prints the ledger totals, then the restock list.
//!
//! ```text
//! --- Sales report ---
//! Orders completed: 2
//! Hot dogs sold: 4
//! Revenue: 629.00₽
//! ⚠ Ingredients to restock: jalapeno
//! ```

use std::io::{BufRead, Write};
use tracing::debug;

use crate::commands::{join_ids, Flow};
use crate::console::Console;
use crate::error::AppResult;
use crate::state::Kiosk;

pub fn show_report<R: BufRead, W: Write>(
    kiosk: &mut Kiosk<'_>,
    console: &mut Console<R, W>,
) -> AppResult<Flow> {
    let report = kiosk.report();
    debug!(orders = report.total_orders, "show_report command");

    console.blank()?;
    console.say("--- Sales report ---")?;
    console.say(format_args!("Orders completed: {}", report.total_orders))?;
    console.say(format_args!("Hot dogs sold: {}", report.total_items))?;
    console.say(format_args!("Revenue: {}", report.total_revenue))?;

    let missing = kiosk.inventory().missing();
    if !missing.is_empty() {
        console.say(format_args!(
            "⚠ Ingredients to restock: {}",
            join_ids(&missing)
        ))?;
    }

    Ok(Flow::Continue)
}
