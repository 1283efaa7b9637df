//! # Payment
//!
//! Settlement of an order total. There is no payment gateway: settling
//! records how the money was taken and produces a receipt.
//!
//! ```text
//! Order total: 459.00₽
//!      │
//!      ▼
//! PaymentMethod::Card.settle(459.00₽) ← guarded: amount must be > 0
//!      │
//!      ▼
//! PaymentReceipt { method: Card, amount: 459.00₽, settled_at }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Payment Method
// =============================================================================

/// How an order was paid. The set of methods is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on the kiosk terminal.
    Card,
}

impl PaymentMethod {
    /// Maps the payment sub-menu selection ("1" cash, "2" card).
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(PaymentMethod::Cash),
            "2" => Some(PaymentMethod::Card),
            _ => None,
        }
    }

    /// Settles `amount` with this method.
    ///
    /// ## Errors
    /// `InvalidAmount` when `amount` is zero or negative.
    pub fn settle(self, amount: Money) -> CoreResult<PaymentReceipt> {
        if !amount.is_positive() {
            return Err(CoreError::InvalidAmount { amount });
        }

        Ok(PaymentReceipt {
            method: self,
            amount,
            settled_at: Utc::now(),
        })
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => f.write_str("cash"),
            PaymentMethod::Card => f.write_str("card"),
        }
    }
}

// =============================================================================
// Payment Receipt
// =============================================================================

/// Record of a settled payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Money,
    pub settled_at: DateTime<Utc>,
}

impl PaymentReceipt {
    /// One-line confirmation shown to the customer.
    pub fn confirmation(&self) -> String {
        match self.method {
            PaymentMethod::Cash => format!("Paid in cash: {}", self.amount),
            PaymentMethod::Card => format!("Paid by card: {}", self.amount),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
