//! Commerce error types.

use crate::money::Money;
use thiserror::Error;

/// Errors that can occur in domain-level operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Currency mismatch between values that should share one currency.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Coupon code is unknown or inactive.
    #[error("Invalid coupon code: {0}")]
    InvalidCoupon(String),

    /// Coupon is outside its validity window.
    #[error("Coupon expired: {0}")]
    CouponExpired(String),

    /// Coupon usage limit reached.
    #[error("Coupon usage limit reached: {0}")]
    CouponUsageLimitReached(String),

    /// Order subtotal below the coupon's minimum.
    #[error("Minimum order amount of {minimum} required")]
    MinimumOrderNotMet { minimum: Money, subtotal: Money },

    /// An upstream address record could not be normalized.
    #[error("Invalid address: missing {0}")]
    InvalidAddress(&'static str),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
