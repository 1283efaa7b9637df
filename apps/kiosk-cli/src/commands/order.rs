//! # Order Command
//!
//! The order sub-loop: collect hot dogs, then show, warn, pay and book.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order::new()                                                           │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌────────────── sub-menu ──────────────┐                              │
//! │  │ 1. Standard recipe ─► recipe number  │── build error ─► report,     │
//! │  │ 2. Build your own  ─► "bun, sausage" │   order stays open           │
//! │  │ 3. Finish order ─────────────────────┼──┐                           │
//! │  └──────────────────────────────────────┘  │                           │
//! │                                             ▼                           │
//! │  describe() ─► missing warning ─► payment menu ─► finalize             │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                  receipt ─► ledger ─► order log         │
//! │                                                                         │
//! │  EOF at any prompt: order abandoned, stock released, session exits      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use kiosk_core::validation::{parse_ingredient_list, parse_menu_index};
use kiosk_core::{
    CoreError, CoreResult, HotDog, HotDogBuilder, Order, PaymentMethod, Recipe, STANDARD_RECIPES,
};

use crate::commands::{join_ids, Flow, INVALID_CHOICE};
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::state::Kiosk;

/// Prompt for the custom hot dog line.
pub const CUSTOM_PROMPT: &str = "Enter ingredients separated by commas (bun, sausage, ketchup, ...): ";

pub fn take_order<R: BufRead, W: Write>(
    kiosk: &mut Kiosk<'_>,
    console: &mut Console<R, W>,
) -> AppResult<Flow> {
    let mut order = Order::new();
    debug!(order_id = %order.id(), "Order opened");

    loop {
        console.blank()?;
        console.say("Choose a hot dog:")?;
        console.say("1. Standard recipe")?;
        console.say("2. Build your own")?;
        console.say("3. Finish order")?;

        let Some(choice) = console.prompt("Choice: ")? else {
            return Ok(abandon(order));
        };

        let built: CoreResult<HotDog> = match choice.as_str() {
            "1" => {
                let Some(recipe) = choose_recipe(console)? else {
                    return Ok(abandon(order));
                };
                HotDogBuilder::from_recipe(kiosk.inventory(), recipe.name)
            }
            "2" => {
                let Some(line) = console.prompt(CUSTOM_PROMPT)? else {
                    return Ok(abandon(order));
                };
                parse_ingredient_list(&line)
                    .map_err(CoreError::from)
                    .and_then(|ids| HotDogBuilder::custom(kiosk.inventory(), &ids))
            }
            "3" => break,
            _ => {
                console.say(INVALID_CHOICE)?;
                continue;
            }
        };

        match built {
            Ok(hotdog) => {
                console.say(format_args!("Added: {}", hotdog.describe()))?;
                order.add_hotdog(hotdog);
            }
            Err(err) => {
                warn!(order_id = %order.id(), error = %err, "Hot dog not built");
                console.error(&AppError::from(err))?;
            }
        }
    }

    if order.is_empty() {
        console.say("The order is empty, nothing to pay.")?;
        return Ok(Flow::Continue);
    }

    console.blank()?;
    console.say(order.describe())?;

    if kiosk.config().low_stock_warnings {
        let missing = kiosk.inventory().missing();
        if !missing.is_empty() {
            console.say(format_args!("⚠ Missing ingredients: {}", join_ids(&missing)))?;
        }
    }

    let Some(method) = choose_payment(console)? else {
        return Ok(abandon(order));
    };

    let order_id = order.id();
    let completed = match order.finalize(method) {
        Ok(completed) => completed,
        Err(err) => {
            warn!(order_id = %order_id, error = %err, "Settlement rejected");
            console.error(&AppError::from(err))?;
            return Ok(Flow::Continue);
        }
    };

    console.say(completed.receipt().confirmation())?;
    console.say(format_args!("Order number: {}", completed.id()))?;

    if let Err(err) = kiosk.complete(&completed) {
        console.error(&err)?;
    }

    Ok(Flow::Continue)
}

/// Numbered recipe list; re-prompts until a valid number is given.
fn choose_recipe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<&'static Recipe>> {
    console.say("Choose a recipe:")?;
    for (i, recipe) in STANDARD_RECIPES.iter().enumerate() {
        console.say(format_args!("{}. {}", i + 1, recipe.name))?;
    }

    loop {
        let Some(input) = console.prompt("Number: ")? else {
            return Ok(None);
        };
        match parse_menu_index(&input, STANDARD_RECIPES.len()) {
            Ok(index) => return Ok(Some(&STANDARD_RECIPES[index])),
            Err(err) => console.error(&AppError::from(err))?,
        }
    }
}

/// Payment sub-menu; re-prompts until cash or card is picked.
fn choose_payment<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<Option<PaymentMethod>> {
    console.blank()?;
    console.say("Choose a payment method:")?;
    console.say("1. Cash")?;
    console.say("2. Card")?;

    loop {
        let Some(input) = console.prompt("Method: ")? else {
            return Ok(None);
        };
        match PaymentMethod::from_menu_choice(&input) {
            Some(method) => return Ok(Some(method)),
            None => console.say(INVALID_CHOICE)?,
        }
    }
}

fn abandon(order: Order) -> Flow {
    info!(order_id = %order.id(), items = order.len(), "Input closed, order abandoned");
    order.abandon();
    Flow::Exit
}
