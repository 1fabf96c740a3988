//! Remote collaborator contracts.
//!
//! The hosted backend implements these; this crate only defines the
//! seams the checkout orchestration needs. Payload shapes on the wire
//! are the backend's business.

use async_trait::async_trait;
use savora_commerce::checkout::{DeliveryAddress, OrderRequest};
use savora_commerce::ids::{AddressId, MenuItemId, OrderId, UserId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque remote failure (network or backend). Surfaced verbatim to the
/// caller and never retried by this layer.
#[derive(Error, Debug)]
#[error("remote call failed: {0}")]
pub struct ApiError(pub String);

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A menu item as returned by the revalidation lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItemSummary {
    pub id: MenuItemId,
    pub name: String,
}

/// Menu lookup used for cart revalidation.
///
/// Implementations must return only ids that currently exist and are
/// available for purchase; anything missing from the response is
/// treated as stale.
#[async_trait]
pub trait MenuSource {
    async fn menu_items_by_ids(
        &self,
        ids: &[MenuItemId],
    ) -> Result<Vec<MenuItemSummary>, ApiError>;
}

#[async_trait]
impl<'a, T: MenuSource + Sync> MenuSource for &'a T {
    async fn menu_items_by_ids(
        &self,
        ids: &[MenuItemId],
    ) -> Result<Vec<MenuItemSummary>, ApiError> {
        (**self).menu_items_by_ids(ids).await
    }
}

/// Identifier pair returned by a successful order creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub order_number: String,
}

/// Order creation endpoint. A single remote call with no
/// partial-success mode: either the whole order (header plus line
/// items) is durably recorded or the call fails.
#[async_trait]
pub trait OrderApi {
    async fn create_order(&self, request: &OrderRequest) -> Result<PlacedOrder, ApiError>;
}

#[async_trait]
impl<'a, T: OrderApi + Sync> OrderApi for &'a T {
    async fn create_order(&self, request: &OrderRequest) -> Result<PlacedOrder, ApiError> {
        (**self).create_order(request).await
    }
}

/// Saved-address CRUD, consumed for the address-selection step before
/// checkout.
#[async_trait]
pub trait AddressBook {
    async fn list_addresses(&self, user_id: &UserId) -> Result<Vec<DeliveryAddress>, ApiError>;

    async fn create_address(
        &self,
        user_id: &UserId,
        address: DeliveryAddress,
    ) -> Result<DeliveryAddress, ApiError>;

    async fn delete_address(&self, user_id: &UserId, address_id: &AddressId)
        -> Result<(), ApiError>;
}
