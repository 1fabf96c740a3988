//! Order types: the submission snapshot and the persisted order record.

use crate::cart::{Cart, CartPricing};
use crate::error::CommerceError;
use crate::ids::{generate_id, AddressId, MenuItemId, OrderId, OrderItemId, RestaurantId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting restaurant confirmation.
    #[default]
    Pending,
    /// Restaurant accepted the order.
    Confirmed,
    /// Food being prepared.
    Preparing,
    /// Courier en route.
    OutForDelivery,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the customer may still cancel.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }
}

/// Payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// Payment pending.
    #[default]
    Pending,
    /// Payment completed.
    Paid,
    /// Payment failed.
    Failed,
    /// Payment refunded.
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// The order submission snapshot built at checkout time.
///
/// Totals are copied from the cart's derived pricing at the moment of
/// submission and are immutable afterwards, even if the live cart
/// changes. Constructed, submitted, discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Ordering user.
    pub user_id: UserId,
    /// Restaurant the whole order is from.
    pub restaurant_id: RestaurantId,
    /// Where to deliver.
    pub delivery_address_id: AddressId,
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Delivery fee.
    pub delivery_fee: Money,
    /// Tax amount.
    pub tax_amount: Money,
    /// Coupon discount (zero when none).
    pub discount_amount: Money,
    /// Grand total.
    pub total_amount: Money,
    /// Items ordered.
    pub items: Vec<OrderItemRequest>,
    /// Client-generated token letting the backend de-duplicate a
    /// retried submission. Fresh per checkout attempt.
    pub idempotency_key: String,
}

impl OrderRequest {
    /// Snapshot a cart's contents and derived totals for submission.
    ///
    /// The caller supplies the resolved restaurant and address; the
    /// cart must already have passed the single-restaurant check.
    pub fn from_cart(
        cart: &Cart,
        pricing: &CartPricing,
        user_id: UserId,
        restaurant_id: RestaurantId,
        delivery_address_id: AddressId,
    ) -> Result<Self, CommerceError> {
        let items = cart
            .items
            .iter()
            .map(|line| {
                Ok(OrderItemRequest {
                    menu_item_id: line.item_id.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    total_price: line.line_total().ok_or(CommerceError::Overflow)?,
                    special_instructions: line.special_instructions.clone(),
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(Self {
            user_id,
            restaurant_id,
            delivery_address_id,
            subtotal: pricing.subtotal,
            delivery_fee: pricing.delivery_fee,
            tax_amount: pricing.tax_total,
            discount_amount: pricing.discount_total,
            total_amount: pricing.grand_total,
            items,
            idempotency_key: generate_id(),
        })
    }
}

/// One line of an order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemRequest {
    /// Menu item being ordered.
    pub menu_item_id: MenuItemId,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at submission time.
    pub unit_price: Money,
    /// Line total at submission time.
    pub total_price: Money,
    /// Free-text instructions for the kitchen.
    pub special_instructions: Option<String>,
}

/// A persisted order as returned by the backend (order history).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Ordering user.
    pub user_id: UserId,
    /// Restaurant the order is from.
    pub restaurant_id: RestaurantId,
    /// Restaurant name (denormalized for display).
    pub restaurant_name: String,
    /// Delivery address used.
    pub delivery_address_id: AddressId,
    /// Order status.
    pub status: OrderStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Items in the order.
    pub items: Vec<OrderItem>,
    /// Subtotal before discounts.
    pub subtotal: Money,
    /// Delivery fee charged.
    pub delivery_fee: Money,
    /// Tax charged.
    pub tax_amount: Money,
    /// Discount applied.
    pub discount_amount: Money,
    /// Grand total charged.
    pub total_amount: Money,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("ORD-{}", ts)
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Cancel the order if the status still allows it.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        let now = current_timestamp();
        self.cancelled_at = Some(now);
        self.updated_at = now;
        true
    }

    /// Update the order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }
}

/// A line item in a persisted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Unique order item identifier.
    pub id: OrderItemId,
    /// Menu item ordered.
    pub menu_item_id: MenuItemId,
    /// Item name at the time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at the time of order.
    pub unit_price: Money,
    /// Line total.
    pub total_price: Money,
    /// Free-text instructions for the kitchen.
    pub special_instructions: Option<String>,
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
