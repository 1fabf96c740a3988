//! Checkout orchestration and remote-API contracts for Savora.
//!
//! The domain types live in `savora-commerce`; this crate adds the
//! async seams to the hosted backend (menu lookup, order creation,
//! saved addresses) and the [`CheckoutOrchestrator`] that ties a cart,
//! a selected address, and an authenticated [`Identity`] together into
//! a submitted order.
//!
//! Scheduling is single-flow per session: the cart is never shared
//! across sessions, and callers must not run two `place_order` calls
//! for the same user concurrently (the backend de-duplicates retried
//! submissions via the request's idempotency key, not this layer).

pub mod api;
pub mod cancel;
pub mod checkout;
pub mod error;
pub mod identity;

pub use api::{AddressBook, ApiError, MenuItemSummary, MenuSource, OrderApi, PlacedOrder};
pub use cancel::CancelToken;
pub use checkout::CheckoutOrchestrator;
pub use error::CheckoutError;
pub use identity::Identity;
