//! Cart pricing configuration and derived totals.

use crate::ids::{MenuItemId, RestaurantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default tax rate: 8% expressed in basis points.
pub const DEFAULT_TAX_RATE_BPS: i64 = 800;

/// Default flat delivery fee in cents ($2.99).
pub const DEFAULT_DELIVERY_FEE_CENTS: i64 = 299;

/// How the delivery fee is computed for a non-empty cart.
///
/// The fee is always zero for an empty cart regardless of policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DeliveryFeePolicy {
    /// Same flat fee for every restaurant.
    Flat(Money),
    /// Per-restaurant fee with a fallback for restaurants not listed.
    PerRestaurant {
        table: HashMap<RestaurantId, Money>,
        fallback: Money,
    },
}

impl DeliveryFeePolicy {
    /// Fee for an order from the given restaurant.
    pub fn fee_for(&self, restaurant_id: &RestaurantId) -> Money {
        match self {
            DeliveryFeePolicy::Flat(fee) => *fee,
            DeliveryFeePolicy::PerRestaurant { table, fallback } => {
                table.get(restaurant_id).copied().unwrap_or(*fallback)
            }
        }
    }
}

/// Pricing knobs applied when deriving cart totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Cart currency.
    pub currency: Currency,
    /// Tax rate in basis points (800 = 8%).
    pub tax_rate_bps: i64,
    /// Delivery fee policy.
    pub delivery_fee: DeliveryFeePolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
            delivery_fee: DeliveryFeePolicy::Flat(Money::new(
                DEFAULT_DELIVERY_FEE_CENTS,
                Currency::USD,
            )),
        }
    }
}

/// Complete pricing breakdown for a cart.
///
/// All components are already rounded to whole cents, so
/// `grand_total == subtotal - discount_total + delivery_fee + tax_total`
/// holds exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals before discounts.
    pub subtotal: Money,
    /// Discount from an applied coupon (zero when none).
    pub discount_total: Money,
    /// Delivery fee (zero for an empty cart).
    pub delivery_fee: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Final total.
    pub grand_total: Money,
    /// Per-line-item breakdown, in cart display order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Check if any discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount_total.is_positive()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Menu item being purchased.
    pub item_id: MenuItemId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity).
    pub line_total: Money,
}
