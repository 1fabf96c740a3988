//! Restaurant catalog record.

use crate::ids::RestaurantId;
use serde::{Deserialize, Serialize};

/// A restaurant offering items for delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: RestaurantId,
    /// Restaurant name.
    pub name: String,
    /// Cuisine type (e.g., "Italian").
    pub cuisine_type: Option<String>,
    /// Street address of the restaurant itself.
    pub street_address: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Image URL for listings.
    pub image_url: Option<String>,
    /// Whether the restaurant is currently accepting orders.
    pub is_active: bool,
}

impl Restaurant {
    /// Create a new restaurant record.
    pub fn new(id: RestaurantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cuisine_type: None,
            street_address: None,
            phone: None,
            image_url: None,
            is_active: true,
        }
    }
}
