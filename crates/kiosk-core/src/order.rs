//! # Orders
//!
//! An [`Order`] collects hot dogs for one checkout. Finalizing it through a
//! [`PaymentMethod`] turns it into a [`CompletedOrder`], which is what the
//! sales ledger and the order log receive.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Order::new() ──► add_hotdog() × n ──► finalize(method) ──► Completed  │
//! │        │                                      │                         │
//! │        │                                      └── error ──┐             │
//! │        ▼                                                  ▼             │
//! │     abandon() / dropped ─────────────────────► stock released           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount
//! From [`DISCOUNT_THRESHOLD`] hot dogs on, the whole order gets
//! [`DISCOUNT_BPS`] off. There are no further tiers.

use chrono::{DateTime, Utc};
use std::mem;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::hotdog::HotDog;
use crate::money::Money;
use crate::payment::{PaymentMethod, PaymentReceipt};
use crate::{DISCOUNT_BPS, DISCOUNT_THRESHOLD};

// =============================================================================
// Order
// =============================================================================

/// An order being assembled.
///
/// Dropping an order that was never finalized returns the stock of its hot
/// dogs to the inventory.
#[derive(Debug)]
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    hotdogs: Vec<HotDog>,
}

impl Order {
    pub fn new() -> Self {
        Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            hotdogs: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn add_hotdog(&mut self, hotdog: HotDog) {
        self.hotdogs.push(hotdog);
    }

    pub fn hotdogs(&self) -> &[HotDog] {
        &self.hotdogs
    }

    pub fn len(&self) -> usize {
        self.hotdogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotdogs.is_empty()
    }

    /// Sum of hot dog prices before discount.
    pub fn subtotal(&self) -> Money {
        self.hotdogs.iter().map(HotDog::price).sum()
    }

    pub fn qualifies_for_discount(&self) -> bool {
        self.hotdogs.len() >= DISCOUNT_THRESHOLD
    }

    /// Amount taken off the subtotal; zero below the threshold.
    pub fn discount(&self) -> Money {
        self.subtotal() - self.total()
    }

    /// Amount due.
    ///
    /// ## Example
    /// ```text
    /// 3 × 100.00₽ = 300.00₽ - 10% = 270.00₽
    /// 2 × 100.00₽ = 200.00₽        (below threshold)
    /// ```
    ///
    /// The total itself is rounded half-up to the kopeck; the discount is
    /// whatever remains of the subtotal.
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        if self.qualifies_for_discount() {
            subtotal.apply_percentage_discount(DISCOUNT_BPS)
        } else {
            subtotal
        }
    }

    /// Multi-line summary: every hot dog, then the discounted total.
    pub fn describe(&self) -> String {
        let mut out = String::from("Your order:\n");
        for hotdog in &self.hotdogs {
            out.push_str(&hotdog.describe());
            out.push('\n');
        }
        if self.qualifies_for_discount() {
            out.push_str(&format!(
                "Discount ({}% for {}+ hot dogs): -{}\n",
                DISCOUNT_BPS / 100,
                DISCOUNT_THRESHOLD,
                self.discount()
            ));
        }
        out.push_str(&format!("Total with discount: {}", self.total()));
        out
    }

    /// Settles the total and closes the order.
    ///
    /// ## Errors
    /// - `EmptyOrder` if no hot dog was added
    /// - `InvalidAmount` if the total is not positive
    ///
    /// On error the order is dropped and its stock released.
    pub fn finalize(mut self, method: PaymentMethod) -> CoreResult<CompletedOrder> {
        if self.hotdogs.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        let subtotal = self.subtotal();
        let total = self.total();
        let discount = subtotal - total;
        let receipt = method.settle(total)?;

        Ok(CompletedOrder {
            id: self.id,
            created_at: self.created_at,
            hotdogs: mem::take(&mut self.hotdogs),
            subtotal,
            discount,
            receipt,
        })
    }

    /// Cancels the order and returns its stock.
    pub fn abandon(self) {
        drop(self);
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Order {
    fn drop(&mut self) {
        for hotdog in &mut self.hotdogs {
            hotdog.release_stock();
        }
    }
}

// =============================================================================
// Completed Order
// =============================================================================

/// A paid order. Immutable.
#[derive(Debug)]
pub struct CompletedOrder {
    id: Uuid,
    created_at: DateTime<Utc>,
    hotdogs: Vec<HotDog>,
    subtotal: Money,
    discount: Money,
    receipt: PaymentReceipt,
}

impl CompletedOrder {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn hotdogs(&self) -> &[HotDog] {
        &self.hotdogs
    }

    pub fn item_count(&self) -> usize {
        self.hotdogs.len()
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    /// The amount that was paid.
    pub fn total(&self) -> Money {
        self.receipt.amount
    }

    pub fn receipt(&self) -> &PaymentReceipt {
        &self.receipt
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotdog::HotDogBuilder;
    use crate::inventory::{Ingredient, Inventory};
    use crate::DEFAULT_STOCK;

    /// Inventory with a single 100₽ "combo" ingredient.
    fn combo_inventory() -> Inventory {
        Inventory::new(vec![Ingredient::new(
            "combo",
            "Combo",
            Money::from_major(100),
            10,
        )])
        .unwrap()
    }

    fn order_of(inventory: &Inventory, count: usize) -> Order {
        let mut order = Order::new();
        for _ in 0..count {
            order.add_hotdog(HotDogBuilder::custom(inventory, &["combo"]).unwrap());
        }
        order
    }

    #[test]
    fn test_three_hotdogs_get_discount() {
        let inventory = combo_inventory();
        let order = order_of(&inventory, 3);

        assert_eq!(order.subtotal(), Money::from_major(300));
        assert_eq!(order.discount(), Money::from_major(30));
        assert_eq!(order.total(), Money::from_major(270));
    }

    #[test]
    fn test_two_hotdogs_pay_full_price() {
        let inventory = combo_inventory();
        let order = order_of(&inventory, 2);

        assert!(!order.qualifies_for_discount());
        assert_eq!(order.total(), Money::from_major(200));
    }

    #[test]
    fn test_discount_is_flat_above_threshold() {
        let inventory = combo_inventory();
        for n in 0..8 {
            let order = order_of(&inventory, n);
            let sum = Money::from_major(100 * n as i64);
            let expected = if n >= DISCOUNT_THRESHOLD {
                sum.apply_percentage_discount(DISCOUNT_BPS)
            } else {
                sum
            };
            assert_eq!(order.total(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_discounted_total_rounds_half_up() {
        let inventory = Inventory::new(vec![Ingredient::new(
            "mini",
            "Mini",
            Money::from_minor(5),
            10,
        )])
        .unwrap();
        let mut order = Order::new();
        for _ in 0..3 {
            order.add_hotdog(HotDogBuilder::custom(&inventory, &["mini"]).unwrap());
        }

        // 0.15₽ × 90% = 0.135₽ → 0.14₽
        assert_eq!(order.subtotal(), Money::from_minor(15));
        assert_eq!(order.total(), Money::from_minor(14));
        assert_eq!(order.discount(), Money::from_minor(1));

        let completed = order.finalize(PaymentMethod::Cash).unwrap();
        assert_eq!(completed.total(), Money::from_minor(14));
        assert_eq!(completed.discount(), Money::from_minor(1));
    }

    #[test]
    fn test_finalize_produces_completed_order() {
        let inventory = Inventory::with_default_stock();
        let mut order = Order::new();
        for name in ["Classic", "Spicy", "Sweet"] {
            order.add_hotdog(HotDogBuilder::from_recipe(&inventory, name).unwrap());
        }
        let id = order.id();

        let completed = order.finalize(PaymentMethod::Card).unwrap();

        // 170 + 125 + 160 = 455, minus 45.50
        assert_eq!(completed.id(), id);
        assert_eq!(completed.item_count(), 3);
        assert_eq!(completed.subtotal(), Money::from_major(455));
        assert_eq!(completed.discount(), Money::from_minor(4550));
        assert_eq!(completed.total(), Money::from_minor(40950));
        assert_eq!(completed.receipt().method, PaymentMethod::Card);
        // finalized stock stays consumed
        assert_eq!(inventory.lookup("bun").unwrap().quantity(), DEFAULT_STOCK - 3);
    }

    #[test]
    fn test_finalize_empty_order_fails() {
        let err = Order::new().finalize(PaymentMethod::Cash).unwrap_err();
        assert_eq!(err, CoreError::EmptyOrder);
    }

    #[test]
    fn test_abandon_releases_stock() {
        let inventory = Inventory::with_default_stock();
        let mut order = Order::new();
        order.add_hotdog(HotDogBuilder::from_recipe(&inventory, "Classic").unwrap());
        order.add_hotdog(HotDogBuilder::from_recipe(&inventory, "Classic").unwrap());
        assert_eq!(inventory.lookup("mustard").unwrap().quantity(), DEFAULT_STOCK - 2);

        order.abandon();

        assert!(inventory
            .list_all()
            .iter()
            .all(|ingredient| ingredient.quantity() == DEFAULT_STOCK));
    }

    #[test]
    fn test_failed_settlement_releases_stock() {
        let inventory = Inventory::new(vec![Ingredient::new(
            "napkin",
            "Napkin",
            Money::zero(),
            1,
        )])
        .unwrap();
        let mut order = Order::new();
        order.add_hotdog(HotDogBuilder::custom(&inventory, &["napkin"]).unwrap());
        assert_eq!(inventory.lookup("napkin").unwrap().quantity(), 0);

        let err = order.finalize(PaymentMethod::Cash).unwrap_err();

        assert!(matches!(err, CoreError::InvalidAmount { .. }));
        assert_eq!(inventory.lookup("napkin").unwrap().quantity(), 1);
    }

    #[test]
    fn test_describe() {
        let inventory = combo_inventory();
        let order = order_of(&inventory, 3);
        assert_eq!(
            order.describe(),
            "Your order:\n\
             Custom: Combo. Price: 100.00₽\n\
             Custom: Combo. Price: 100.00₽\n\
             Custom: Combo. Price: 100.00₽\n\
             Discount (10% for 3+ hot dogs): -30.00₽\n\
             Total with discount: 270.00₽"
        );
    }
}
