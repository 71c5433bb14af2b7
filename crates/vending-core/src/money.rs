//! # Money Module
//!
//! Provides the `Money` type for prices and balances.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    balance 2.00 - price 1.50 might not print as 0.50                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    200 cents - 150 cents = 50 cents, always                             │
//! │    Bundle discounts round explicitly (half-up) to whole cents           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vending_core::money::Money;
//!
//! let soda = Money::from_cents(150); // $1.50
//! let chips = Money::from_major_minor(2, 0);
//!
//! let sum = soda + chips;
//! assert_eq!(sum.cents(), 350);
//!
//! // 20% of the sum, as used for bundle pricing
//! assert_eq!(sum.percentage(2000).cents(), 70);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets a balance be compared and subtracted freely
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for reports and configuration
///
/// ## Where Money is Used
/// ```text
/// Item.price ──┬──► Slot.price() ──► Machine.price_at() ──► purchase()
///              │                                              │
///              └──► Bundle.price() (20% of member sum)        ▼
///                                                  PaymentHandle.debit()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::money::Money;
    ///
    /// let price = Money::from_cents(150); // Represents $1.50
    /// assert_eq!(price.cents(), 150);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::money::Money;
    ///
    /// let price = Money::from_major_minor(1, 50); // $1.50
    /// assert_eq!(price.cents(), 150);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Returns `bps` basis points of this amount, rounded half-up to a cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use vending_core::money::Money;
    ///
    /// let sum = Money::from_cents(300);
    /// assert_eq!(sum.percentage(2000).cents(), 60); // 20% of $3.00
    ///
    /// let odd = Money::from_cents(333);
    /// assert_eq!(odd.percentage(2000).cents(), 67); // 66.6 → 67
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 keeps large sums from overflowing during the multiply
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and error messages only. Locale-aware formatting belongs
/// to whatever presents prices to customers.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summing an iterator of prices (bundle member totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(1, 50).cents(), 150);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(150)), "$1.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(200);
        let b = Money::from_cents(150);

        assert_eq!((a + b).cents(), 350);
        assert_eq!((a - b).cents(), 50);

        let mut balance = a;
        balance -= b;
        assert_eq!(balance, Money::from_cents(50));
        balance += b;
        assert_eq!(balance, a);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_cents(300).percentage(2000).cents(), 60);
        assert_eq!(Money::from_cents(100).percentage(2000).cents(), 20);
        // 0.2 * 333 = 66.6
        assert_eq!(Money::from_cents(333).percentage(2000).cents(), 67);
        // 0.2 * 2 = 0.4
        assert_eq!(Money::from_cents(2).percentage(2000).cents(), 0);
        // 0.2 * 5 = 1.0
        assert_eq!(Money::from_cents(5).percentage(2000).cents(), 1);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(100), Money::from_cents(250)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 350);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::from_cents(-1).is_positive());
        assert!(Money::zero().is_zero());
    }
}
