//! Checkout module.
//!
//! Contains the delivery address type and the order value objects built
//! at submission time. The orchestration that submits them lives in the
//! `savora-client` crate.

mod address;
mod order;

pub use address::DeliveryAddress;
pub use order::{
    Order, OrderItem, OrderItemRequest, OrderRequest, OrderStatus, PaymentStatus,
};
