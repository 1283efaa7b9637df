//! # Sales Ledger
//!
//! Running totals for the whole kiosk session. The ledger is built once at
//! startup and handed to the console loop by `&mut`; it only grows.

use crate::money::Money;
use crate::order::CompletedOrder;

/// Accumulates completed orders.
///
/// Recording is not idempotent: the caller records each completed order
/// exactly once.
#[derive(Debug, Default)]
pub struct SalesLedger {
    total_items: u64,
    total_revenue: Money,
    total_orders: u64,
}

impl SalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the order's hot dog count and paid total.
    pub fn record_order(&mut self, order: &CompletedOrder) {
        self.total_items += order.item_count() as u64;
        self.total_revenue += order.total();
        self.total_orders += 1;
    }

    pub fn report(&self) -> SalesReport {
        SalesReport {
            total_items: self.total_items,
            total_revenue: self.total_revenue,
            total_orders: self.total_orders,
        }
    }
}

/// Snapshot of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesReport {
    /// Hot dogs sold.
    pub total_items: u64,
    /// Sum of paid totals (after discounts).
    pub total_revenue: Money,
    /// Orders completed.
    pub total_orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotdog::HotDogBuilder;
    use crate::inventory::{Ingredient, Inventory};
    use crate::order::Order;
    use crate::payment::PaymentMethod;

    fn priced_inventory() -> Inventory {
        Inventory::new(vec![
            Ingredient::new("ten", "Ten", Money::from_major(10), 10),
            Ingredient::new("twenty", "Twenty", Money::from_major(20), 10),
            Ingredient::new("thirty", "Thirty", Money::from_major(30), 10),
        ])
        .unwrap()
    }

    fn completed(inventory: &Inventory, hotdogs: &[&str]) -> CompletedOrder {
        let mut order = Order::new();
        for id in hotdogs {
            order.add_hotdog(HotDogBuilder::custom(inventory, &[*id]).unwrap());
        }
        order.finalize(PaymentMethod::Cash).unwrap()
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(SalesLedger::new().report(), SalesReport::default());
    }

    #[test]
    fn test_record_order_is_additive() {
        let inventory = priced_inventory();
        let mut ledger = SalesLedger::new();

        for id in ["ten", "twenty", "thirty"] {
            ledger.record_order(&completed(&inventory, &[id]));
        }

        let report = ledger.report();
        assert_eq!(report.total_revenue, Money::from_major(60));
        assert_eq!(report.total_items, 3);
        assert_eq!(report.total_orders, 3);
    }

    #[test]
    fn test_revenue_uses_discounted_totals() {
        let inventory = priced_inventory();
        let mut ledger = SalesLedger::new();

        // 10 + 20 + 30 = 60, discounted to 54
        let big = completed(&inventory, &["ten", "twenty", "thirty"]);
        // below threshold: 20
        let small = completed(&inventory, &["ten", "ten"]);
        ledger.record_order(&big);
        ledger.record_order(&small);

        let report = ledger.report();
        assert_eq!(report.total_revenue, Money::from_major(74));
        assert_eq!(report.total_revenue, big.total() + small.total());
        assert_eq!(report.total_items, 5);
        assert_eq!(report.total_orders, 2);
    }

    #[test]
    fn test_report_is_read_only() {
        let inventory = priced_inventory();
        let mut ledger = SalesLedger::new();
        ledger.record_order(&completed(&inventory, &["ten"]));

        assert_eq!(ledger.report(), ledger.report());
    }
}
