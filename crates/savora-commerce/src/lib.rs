//! Food-delivery domain types and logic for Savora.
//!
//! This crate is the pure domain core shared by the client application:
//!
//! - **Menu**: restaurants and menu items mirrored from the backend
//! - **Cart**: the in-memory cart store, pricing, and coupons
//! - **Checkout**: delivery addresses and order value objects
//!
//! It performs no I/O; the `savora-client` crate supplies the remote-API
//! contracts and the checkout orchestration on top of these types.
//!
//! # Example
//!
//! ```rust
//! use savora_commerce::prelude::*;
//!
//! let restaurant = Restaurant::new(RestaurantId::new("rest-1"), "Trattoria Roma");
//! let pizza = MenuItem::new(
//!     MenuItemId::new("item-1"),
//!     restaurant.id.clone(),
//!     "Margherita",
//!     Money::new(1299, Currency::USD),
//! );
//!
//! let mut cart = Cart::default();
//! cart.add_item(&pizza, &restaurant);
//! cart.add_item(&pizza, &restaurant);
//!
//! let pricing = cart.pricing().unwrap();
//! assert_eq!(pricing.subtotal, Money::new(2598, Currency::USD));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod menu;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Menu
    pub use crate::menu::{MenuItem, Restaurant};

    // Cart
    pub use crate::cart::{
        AppliedCoupon, Cart, CartPricing, Coupon, CouponValue, DeliveryFeePolicy, LineItem,
        LineItemPricing, PricingConfig, RestaurantRef,
    };

    // Checkout
    pub use crate::checkout::{
        DeliveryAddress, Order, OrderItem, OrderItemRequest, OrderRequest, OrderStatus,
        PaymentStatus,
    };
}
