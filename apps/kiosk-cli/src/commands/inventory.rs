//! # Inventory Command
//!
//! Lists every ingredient with the units left, in stock-table order.

use std::io::{BufRead, Write};
use tracing::debug;

use crate::commands::Flow;
use crate::console::Console;
use crate::error::AppResult;
use crate::state::Kiosk;

pub fn show_inventory<R: BufRead, W: Write>(
    kiosk: &mut Kiosk<'_>,
    console: &mut Console<R, W>,
) -> AppResult<Flow> {
    let inventory = kiosk.inventory();
    debug!(ingredients = inventory.len(), "show_inventory command");

    console.blank()?;
    console.say("Ingredient stock:")?;
    for ingredient in inventory.list_all() {
        console.say(ingredient)?;
    }

    Ok(Flow::Continue)
}
