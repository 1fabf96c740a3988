//! Money type for representing monetary values.
//!
//! Uses a minor-unit (cents) integer representation to avoid the
//! floating-point precision issues that plague monetary calculations.
//! All intermediate arithmetic stays in integer cents; the only rounding
//! happens at the single point where a percentage (tax, coupon) is taken,
//! half-up to the nearest cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies. All use two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "CA$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CAD" => Some(Currency::CAD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (cents).
    pub cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(cents: i64, currency: Currency) -> Self {
        Self { cents, currency }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use savora_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(12.99, Currency::USD);
    /// assert_eq!(price.cents, 1299);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal value for display purposes.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$12.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.cents.checked_add(other.cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn checked_sub(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let cents = self.cents.checked_sub(other.cents)?;
        Some(Money::new(cents, self.currency))
    }

    /// Try to multiply by a quantity.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        let cents = self.cents.checked_mul(factor)?;
        Some(Money::new(cents, self.currency))
    }

    /// Take a basis-point fraction of this amount, rounded half-up.
    ///
    /// Used for tax rates and percentage coupons, e.g. 8% = 800 bps.
    /// Computed through i128 so the intermediate product cannot overflow.
    pub fn percentage_bps(&self, bps: i64) -> Money {
        let scaled = self.cents as i128 * bps as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        Money::new(rounded as i64, self.currency)
    }

    /// Sum an iterator of Money values with overflow checking.
    pub fn checked_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.checked_add(&other)
            .expect("currency mismatch or overflow in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.checked_sub(&other)
            .expect("currency mismatch or overflow in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.checked_mul(factor)
            .expect("overflow in multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(1299, Currency::USD);
        assert_eq!(m.cents, 1299);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(12.99, Currency::USD);
        assert_eq!(m.cents, 1299);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(1299, Currency::USD);
        assert_eq!(m.display(), "$12.99");

        let m = Money::new(250, Currency::GBP);
        assert_eq!(m.display(), "\u{00a3}2.50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!((a + b).cents, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(300, Currency::USD);
        assert_eq!((a - b).cents, 700);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1299, Currency::USD);
        assert_eq!((m * 2).cents, 2598);
    }

    #[test]
    fn test_percentage_bps_rounds_half_up() {
        // 8% of $25.98 = $2.0784 -> $2.08
        let m = Money::new(2598, Currency::USD);
        assert_eq!(m.percentage_bps(800).cents, 208);

        // 8% of $12.99 = $1.0392 -> $1.04
        let m = Money::new(1299, Currency::USD);
        assert_eq!(m.percentage_bps(800).cents, 104);

        // Exactly half a cent rounds up: 5% of $0.10 = $0.005 -> $0.01
        let m = Money::new(10, Currency::USD);
        assert_eq!(m.percentage_bps(500).cents, 1);
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd.checked_add(&eur).is_none());
    }

    #[test]
    fn test_checked_sum() {
        let values = [
            Money::new(100, Currency::USD),
            Money::new(250, Currency::USD),
        ];
        let sum = Money::checked_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(sum.cents, 350);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("gbp"), Some(Currency::GBP));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
