//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    13.0 * 0.9 = 11.700000000000001  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (kopecks)                            │
//! │    1300 kopecks - 10% (130) = 1170 kopecks = 11.70₽                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! let bun = Money::from_major(50);            // 50.00₽
//! let mustard = Money::from_minor(2000);      // 20.00₽
//! let total = bun + mustard;
//! assert_eq!(total.to_string(), "70.00₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Currency symbol printed after every amount.
pub const CURRENCY_SYMBOL: &str = "₽";

/// Minor units per major unit.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (kopecks).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts are computed as differences, and a guarded
///   settlement must be able to *see* a negative amount to reject it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as the raw minor-unit integer**
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_minor(1050); // 10.50₽
    /// assert_eq!(price.minor(), 1050);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the given share of this amount, in basis points.
    ///
    /// Rounds half up to the nearest minor unit:
    /// `(amount * bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let subtotal = Money::from_major(300);
    /// assert_eq!(subtotal.percentage(1000), Money::from_major(30)); // 10%
    ///
    /// // 10% of 0.05₽ is 0.005₽ → rounds up to 0.01₽
    /// assert_eq!(Money::from_minor(5).percentage(1000).minor(), 1);
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 so that large amounts cannot overflow the intermediate product
        let share = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_minor(share as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The remaining share is rounded half-up to the kopeck.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let subtotal = Money::from_major(100);
    /// let discounted = subtotal.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(discounted, Money::from_major(90));
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        self.percentage(10_000u32.saturating_sub(discount_bps))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `<major>.<minor>₽`, e.g. `170.00₽` or `-1.50₽`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}{}",
            sign,
            self.major().abs(),
            self.minor_part(),
            CURRENCY_SYMBOL
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
