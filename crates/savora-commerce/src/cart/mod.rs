//! Shopping cart module.
//!
//! Contains the cart store, line items, pricing, and coupons.

mod cart;
mod coupon;
mod pricing;

pub use cart::{Cart, LineItem, RestaurantRef};
pub use coupon::{AppliedCoupon, Coupon, CouponValue};
pub use pricing::{
    CartPricing, DeliveryFeePolicy, LineItemPricing, PricingConfig, DEFAULT_DELIVERY_FEE_CENTS,
    DEFAULT_TAX_RATE_BPS,
};
