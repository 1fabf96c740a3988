//! Menu item catalog record.

use crate::ids::{MenuItemId, RestaurantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable entry on a restaurant's menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique menu item identifier (unique within a restaurant's menu).
    pub id: MenuItemId,
    /// Owning restaurant.
    pub restaurant_id: RestaurantId,
    /// Item name.
    pub name: String,
    /// Description for listings.
    pub description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Category label (e.g., "Mains").
    pub category: Option<String>,
    /// Image URL for listings.
    pub image_url: Option<String>,
    /// Whether the item can currently be ordered.
    pub is_available: bool,
}

impl MenuItem {
    /// Create a new menu item record.
    pub fn new(
        id: MenuItemId,
        restaurant_id: RestaurantId,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            name: name.into(),
            description: None,
            price,
            category: None,
            image_url: None,
            is_available: true,
        }
    }
}
