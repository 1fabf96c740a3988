//! Address-selection flow against an in-memory address book.

use std::sync::Mutex;

use async_trait::async_trait;
use savora_client::{AddressBook, ApiError};
use savora_commerce::prelude::*;
use serde_json::json;

/// Stores raw upstream rows the way the backend does and normalizes on
/// read, so rows written by older app versions still come back usable.
#[derive(Default)]
struct FakeAddressBook {
    rows: Mutex<Vec<serde_json::Value>>,
}

#[async_trait]
impl AddressBook for FakeAddressBook {
    async fn list_addresses(&self, _user_id: &UserId) -> Result<Vec<DeliveryAddress>, ApiError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| DeliveryAddress::from_upstream(row).map_err(|e| ApiError::new(e.to_string())))
            .collect()
    }

    async fn create_address(
        &self,
        _user_id: &UserId,
        address: DeliveryAddress,
    ) -> Result<DeliveryAddress, ApiError> {
        self.rows
            .lock()
            .unwrap()
            .push(serde_json::to_value(&address).map_err(|e| ApiError::new(e.to_string()))?);
        Ok(address)
    }

    async fn delete_address(
        &self,
        _user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<(), ApiError> {
        self.rows.lock().unwrap().retain(|row| {
            row.get("id").and_then(|v| v.as_str()) != Some(address_id.as_str())
        });
        Ok(())
    }
}

#[tokio::test]
async fn legacy_rows_normalize_into_selectable_addresses() {
    let book = FakeAddressBook::default();
    // A row written by an old app version: `street` + `zipCode`.
    book.rows.lock().unwrap().push(json!({
        "id": "addr-legacy",
        "label": "Work",
        "street": "456 Oak Ave",
        "city": "Springfield",
        "state": "IL",
        "zipCode": "62702"
    }));

    let user = UserId::new("user-1");
    let addresses = book.list_addresses(&user).await.unwrap();
    assert_eq!(addresses.len(), 1);
    let selected = &addresses[0];
    assert_eq!(selected.street_address, "456 Oak Ave");
    assert_eq!(selected.postal_code, "62702");
    assert!(selected.is_complete());

    // The normalized address slots straight into the cart.
    let mut cart = Cart::default();
    cart.set_delivery_address(Some(selected.clone()));
    assert!(cart.delivery_address.is_some());
}

#[tokio::test]
async fn create_then_delete_round_trips() {
    let book = FakeAddressBook::default();
    let user = UserId::new("user-1");

    let created = book
        .create_address(
            &user,
            DeliveryAddress {
                id: AddressId::new("addr-1"),
                label: "Home".to_string(),
                street_address: "123 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62704".to_string(),
                instructions: Some("ring twice".to_string()),
            },
        )
        .await
        .unwrap();

    let listed = book.list_addresses(&user).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);

    book.delete_address(&user, &created.id).await.unwrap();
    assert!(book.list_addresses(&user).await.unwrap().is_empty());
}
