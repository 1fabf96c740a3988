//! Checkout error taxonomy.

use crate::api::ApiError;
use savora_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by order placement.
///
/// Every failure leaves the cart in a well-defined state: unchanged,
/// except `StaleItems` which removes the vanished lines before
/// reporting. Nothing here is fatal; the caller decides whether to
/// correct input, acknowledge removals, or retry.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// No delivery address selected. Recoverable by selecting one.
    #[error("no delivery address selected")]
    NoAddress,

    /// The cart has no items.
    #[error("cart is empty")]
    EmptyCart,

    /// Items from more than one restaurant. Recoverable by the caller
    /// clearing or splitting the cart.
    #[error("cart contains items from more than one restaurant")]
    MixedRestaurants,

    /// Menu items vanished upstream since being added. The stale lines
    /// were removed from the cart and the attempt aborted; the caller
    /// should acknowledge and re-invoke.
    #[error("{removed} unavailable item(s) removed from cart; order not submitted")]
    StaleItems { removed: usize },

    /// Domain-level failure while deriving totals or snapshotting.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Network or backend failure, surfaced verbatim, never retried
    /// automatically.
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// Cancellation was requested before the next network call.
    #[error("checkout cancelled")]
    Cancelled,
}

impl CheckoutError {
    /// True for caller-input problems fixable without touching the cart
    /// contents (address selection, adding items).
    pub fn is_validation(&self) -> bool {
        matches!(self, CheckoutError::NoAddress | CheckoutError::EmptyCart)
    }
}
