//! Delivery address type and upstream-schema normalization.

use crate::error::CommerceError;
use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// A saved delivery address, owned by the user's remote profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryAddress {
    /// Unique address identifier.
    pub id: AddressId,
    /// Short label (e.g., "Home", "Work").
    pub label: String,
    /// Street address.
    pub street_address: String,
    /// City.
    pub city: String,
    /// State/province.
    pub state: String,
    /// Postal/ZIP code.
    pub postal_code: String,
    /// Delivery instructions (e.g., "ring twice").
    pub instructions: Option<String>,
}

impl DeliveryAddress {
    /// Format as a single line for display.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street_address, self.city, self.state, self.postal_code
        )
    }

    /// Check that every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.street_address.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.postal_code.is_empty()
    }

    /// Normalize an upstream address record into the canonical shape.
    ///
    /// Older profile rows spell fields differently (`street` vs
    /// `street_address` vs `address`, `zip` vs `zip_code` vs
    /// `postal_code`, snake_case vs camelCase). This is the single
    /// place that tolerance lives; everything past this boundary sees
    /// one shape.
    pub fn from_upstream(value: &serde_json::Value) -> Result<Self, CommerceError> {
        let street = first_string(value, &["street_address", "streetAddress", "street", "address"])
            .ok_or(CommerceError::InvalidAddress("street address"))?;
        let city =
            first_string(value, &["city"]).ok_or(CommerceError::InvalidAddress("city"))?;
        let state = first_string(value, &["state", "province"])
            .ok_or(CommerceError::InvalidAddress("state"))?;
        let postal_code = first_string(value, &["postal_code", "zip_code", "zipCode", "zip"])
            .ok_or(CommerceError::InvalidAddress("postal code"))?;

        let id = first_string(value, &["id"])
            .map(AddressId::new)
            .unwrap_or_else(AddressId::generate);
        let label = first_string(value, &["label"]).unwrap_or_else(|| "Home".to_string());
        let instructions = first_string(value, &["instructions", "delivery_instructions"]);

        Ok(Self {
            id,
            label,
            street_address: street,
            city,
            state,
            postal_code,
            instructions,
        })
    }
}

/// First non-empty string value among the candidate keys.
fn first_string(value: &serde_json::Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
