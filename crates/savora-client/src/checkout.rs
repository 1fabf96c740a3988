//! Order placement orchestration.
//!
//! Transforms the current cart plus a selected address and an
//! authenticated identity into a submitted order: revalidate line items
//! against the live menu, enforce the single-restaurant rule, snapshot
//! totals, submit, and clear the cart on success. No step is retried
//! automatically.

use std::collections::HashSet;

use savora_commerce::cart::Cart;
use savora_commerce::checkout::OrderRequest;
use savora_commerce::ids::MenuItemId;
use tracing::{debug, warn};

use crate::api::{MenuSource, OrderApi, PlacedOrder};
use crate::cancel::CancelToken;
use crate::error::CheckoutError;
use crate::identity::Identity;

/// Drives order placement against the remote menu and order APIs.
///
/// Collaborators and the cart are injected; one instance per session
/// scope, never a process-wide singleton.
pub struct CheckoutOrchestrator<M, O> {
    menu: M,
    orders: O,
}

impl<M: MenuSource, O: OrderApi> CheckoutOrchestrator<M, O> {
    pub fn new(menu: M, orders: O) -> Self {
        Self { menu, orders }
    }

    /// Place an order from the cart's current contents.
    ///
    /// On success the cart is cleared and the backend's identifiers are
    /// returned unchanged. On failure the cart is left untouched, with
    /// one exception: stale line items (ids the menu lookup no longer
    /// returns) are removed before the attempt aborts with
    /// [`CheckoutError::StaleItems`], so a re-invocation submits only
    /// items that still exist.
    pub async fn place_order(
        &self,
        cart: &mut Cart,
        identity: &Identity,
        cancel: &CancelToken,
    ) -> Result<PlacedOrder, CheckoutError> {
        let address = cart
            .delivery_address
            .clone()
            .ok_or(CheckoutError::NoAddress)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Revalidation: anything the menu lookup doesn't return was
        // deleted upstream since being added to the cart.
        if cancel.is_cancelled() {
            return Err(CheckoutError::Cancelled);
        }
        let cart_ids: Vec<MenuItemId> = cart.items.iter().map(|l| l.item_id.clone()).collect();
        let live = self.menu.menu_items_by_ids(&cart_ids).await?;
        let live_ids: HashSet<&MenuItemId> = live.iter().map(|m| &m.id).collect();
        let stale: Vec<MenuItemId> = cart_ids
            .iter()
            .filter(|id| !live_ids.contains(id))
            .cloned()
            .collect();
        if !stale.is_empty() {
            for id in &stale {
                cart.remove_item(id);
            }
            warn!(removed = stale.len(), "stale menu items removed from cart");
            return Err(CheckoutError::StaleItems {
                removed: stale.len(),
            });
        }

        if cart.has_mixed_restaurants() {
            return Err(CheckoutError::MixedRestaurants);
        }
        let restaurant = cart
            .current_restaurant()
            .ok_or(CheckoutError::EmptyCart)?;

        // Snapshot totals at the moment of submission; the request is
        // immutable from here even if the live cart changes.
        let pricing = cart.pricing()?;
        let request = OrderRequest::from_cart(
            cart,
            &pricing,
            identity.user_id.clone(),
            restaurant.id.clone(),
            address.id.clone(),
        )?;

        if cancel.is_cancelled() {
            return Err(CheckoutError::Cancelled);
        }
        debug!(
            restaurant = %restaurant.id,
            items = request.items.len(),
            total = %request.total_amount,
            "submitting order"
        );
        let placed = self.orders.create_order(&request).await?;

        cart.clear();
        debug!(order_number = %placed.order_number, "order placed");
        Ok(placed)
    }
}
