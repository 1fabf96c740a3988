//! Coupon validation and discount computation.

use crate::error::CommerceError;
use crate::ids::CouponId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Value of a coupon's discount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CouponValue {
    /// Percentage off the subtotal, in basis points (1000 = 10%).
    Percentage(i64),
    /// Fixed amount off, capped at the subtotal.
    Fixed(Money),
}

impl CouponValue {
    /// Calculate the discount amount for a given subtotal.
    pub fn calculate(&self, subtotal: &Money) -> Money {
        match self {
            CouponValue::Percentage(bps) => subtotal.percentage_bps(*bps),
            CouponValue::Fixed(amount) => {
                if amount.cents > subtotal.cents {
                    *subtotal
                } else {
                    *amount
                }
            }
        }
    }
}

/// A coupon definition as stored upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Unique coupon identifier.
    pub id: CouponId,
    /// Coupon code (e.g., "SAVE10").
    pub code: String,
    /// Description for display.
    pub description: Option<String>,
    /// Discount value.
    pub value: CouponValue,
    /// Minimum order subtotal required.
    pub minimum_order: Option<Money>,
    /// Cap on the computed discount.
    pub maximum_discount: Option<Money>,
    /// Maximum number of redemptions (None = unlimited).
    pub usage_limit: Option<i64>,
    /// Redemptions so far.
    pub used_count: i64,
    /// Start of validity window (Unix timestamp).
    pub valid_from: Option<i64>,
    /// End of validity window (Unix timestamp).
    pub valid_until: Option<i64>,
    /// Whether the coupon is active.
    pub is_active: bool,
}

impl Coupon {
    /// Create a percentage coupon (basis points, 1000 = 10%).
    pub fn percentage(code: impl Into<String>, bps: i64) -> Self {
        Self {
            id: CouponId::generate(),
            code: code.into(),
            description: None,
            value: CouponValue::Percentage(bps),
            minimum_order: None,
            maximum_discount: None,
            usage_limit: None,
            used_count: 0,
            valid_from: None,
            valid_until: None,
            is_active: true,
        }
    }

    /// Create a fixed-amount coupon.
    pub fn fixed(code: impl Into<String>, amount: Money) -> Self {
        Self {
            id: CouponId::generate(),
            code: code.into(),
            description: None,
            value: CouponValue::Fixed(amount),
            minimum_order: None,
            maximum_discount: None,
            usage_limit: None,
            used_count: 0,
            valid_from: None,
            valid_until: None,
            is_active: true,
        }
    }

    /// Require a minimum order subtotal.
    pub fn with_minimum_order(mut self, amount: Money) -> Self {
        self.minimum_order = Some(amount);
        self
    }

    /// Cap the computed discount.
    pub fn with_maximum_discount(mut self, amount: Money) -> Self {
        self.maximum_discount = Some(amount);
        self
    }

    /// Limit total redemptions.
    pub fn with_usage_limit(mut self, limit: i64) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    /// Restrict to a validity window.
    pub fn valid_between(mut self, from: i64, until: i64) -> Self {
        self.valid_from = Some(from);
        self.valid_until = Some(until);
        self
    }

    /// Check if the coupon has hit its usage limit.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .map(|limit| self.used_count >= limit)
            .unwrap_or(false)
    }

    /// Check if the coupon is outside its validity window at `now`.
    pub fn is_expired(&self, now: i64) -> bool {
        if let Some(from) = self.valid_from {
            if now < from {
                return true;
            }
        }
        if let Some(until) = self.valid_until {
            if now > until {
                return true;
            }
        }
        false
    }

    /// Validate against an order subtotal and compute the discount.
    pub fn validate(&self, subtotal: &Money, now: i64) -> Result<Money, CommerceError> {
        if !self.is_active {
            return Err(CommerceError::InvalidCoupon(self.code.clone()));
        }
        if self.is_expired(now) {
            return Err(CommerceError::CouponExpired(self.code.clone()));
        }
        if self.is_exhausted() {
            return Err(CommerceError::CouponUsageLimitReached(self.code.clone()));
        }
        if let Some(minimum) = self.minimum_order {
            if subtotal.cents < minimum.cents {
                return Err(CommerceError::MinimumOrderNotMet {
                    minimum,
                    subtotal: *subtotal,
                });
            }
        }

        let mut discount = self.value.calculate(subtotal);
        if let Some(cap) = self.maximum_discount {
            if discount.cents > cap.cents {
                discount = cap;
            }
        }
        Ok(discount)
    }
}

/// A coupon applied to a cart, with the discount frozen at apply time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedCoupon {
    /// The coupon ID.
    pub coupon_id: CouponId,
    /// The code used.
    pub code: String,
    /// Discount at the time of application.
    pub amount: Money,
}

impl AppliedCoupon {
    /// Create from a coupon and its computed discount.
    pub fn from_coupon(coupon: &Coupon, amount: Money) -> Self {
        Self {
            coupon_id: coupon.id.clone(),
            code: coupon.code.clone(),
            amount,
        }
    }
}
