//! # Kiosk Session
//!
//! Borrowed view over the long-lived kiosk state, handed to every command.

use tracing::info;

use kiosk_core::{CompletedOrder, Inventory, SalesLedger, SalesReport};
use kiosk_store::OrderLog;

use crate::error::AppResult;
use crate::state::ConfigState;

/// The state a running kiosk works against.
pub struct Kiosk<'a> {
    config: &'a ConfigState,
    inventory: &'a Inventory,
    ledger: &'a mut SalesLedger,
    log: &'a OrderLog,
}

impl<'a> Kiosk<'a> {
    pub fn new(
        config: &'a ConfigState,
        inventory: &'a Inventory,
        ledger: &'a mut SalesLedger,
        log: &'a OrderLog,
    ) -> Self {
        Kiosk {
            config,
            inventory,
            ledger,
            log,
        }
    }

    pub fn config(&self) -> &'a ConfigState {
        self.config
    }

    pub fn inventory(&self) -> &'a Inventory {
        self.inventory
    }

    pub fn report(&self) -> SalesReport {
        self.ledger.report()
    }

    /// Books a paid order: ledger first, then the order log.
    ///
    /// A log failure is returned to the caller; the sale stays in the ledger.
    pub fn complete(&mut self, order: &CompletedOrder) -> AppResult<()> {
        self.ledger.record_order(order);

        info!(
            order_id = %order.id(),
            items = order.item_count(),
            total = %order.total(),
            method = %order.receipt().method,
            "Order completed"
        );

        self.log.append(order)?;
        Ok(())
    }
}
