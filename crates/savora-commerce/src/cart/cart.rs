//! Cart and line item types.
//!
//! The cart is the authoritative in-memory state for a single user
//! session. Mutations are synchronous; totals are derived on read from
//! the current line items and the cart's [`PricingConfig`].

use crate::cart::{AppliedCoupon, CartPricing, Coupon, LineItemPricing, PricingConfig};
use crate::checkout::DeliveryAddress;
use crate::error::CommerceError;
use crate::ids::{MenuItemId, RestaurantId};
use crate::menu::{MenuItem, Restaurant};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A shopping cart for one user session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Line items in insertion order (stable for display).
    pub items: Vec<LineItem>,
    /// Selected delivery address. The cart holds a copy for checkout;
    /// the user's profile owns the address lifecycle.
    pub delivery_address: Option<DeliveryAddress>,
    /// Applied coupon, if any.
    pub coupon: Option<AppliedCoupon>,
    /// Pricing knobs used for derived totals.
    pub pricing_config: PricingConfig,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last mutation.
    pub updated_at: i64,
}

impl Cart {
    /// Create an empty cart with the given pricing configuration.
    pub fn new(pricing_config: PricingConfig) -> Self {
        let now = current_timestamp();
        Self {
            items: Vec::new(),
            delivery_address: None,
            coupon: None,
            pricing_config,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one unit of a menu item.
    ///
    /// If the item is already in the cart its quantity is incremented by
    /// one and the stored name/price are kept as-is (first write wins —
    /// the line represents one catalog entry, not the argument values).
    /// Otherwise a new line is appended with quantity 1, stamped with
    /// the supplied restaurant. Never fails; the caller may check
    /// [`Cart::has_mixed_restaurants`] before or after.
    pub fn add_item(&mut self, item: &MenuItem, restaurant: &Restaurant) {
        if let Some(existing) = self.items.iter_mut().find(|line| line.item_id == item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
                restaurant_id: restaurant.id.clone(),
                restaurant_name: restaurant.name.clone(),
                added_at: current_timestamp(),
                special_instructions: None,
            });
        }
        self.updated_at = current_timestamp();
    }

    /// Remove a line item. Returns false (not an error) if absent.
    pub fn remove_item(&mut self, item_id: &MenuItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|line| &line.item_id != item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Replace a line item's quantity.
    ///
    /// A quantity of zero or below removes the line instead of keeping
    /// it at zero. Returns false if the item is absent.
    pub fn set_quantity(&mut self, item_id: &MenuItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(item_id);
        }

        if let Some(line) = self.items.iter_mut().find(|line| &line.item_id == item_id) {
            line.quantity = quantity;
            self.updated_at = current_timestamp();
            true
        } else {
            false
        }
    }

    /// Empty the cart. The selected delivery address is kept; the
    /// applied coupon is dropped with the items it discounted.
    pub fn clear(&mut self) {
        self.items.clear();
        self.coupon = None;
        self.updated_at = current_timestamp();
    }

    /// Replace the selected delivery address.
    pub fn set_delivery_address(&mut self, address: Option<DeliveryAddress>) {
        self.delivery_address = address;
        self.updated_at = current_timestamp();
    }

    /// Validate a coupon against the current subtotal and apply it.
    ///
    /// The discount is frozen at apply time; returns the amount.
    pub fn apply_coupon(&mut self, coupon: &Coupon, now: i64) -> Result<Money, CommerceError> {
        let subtotal = self.subtotal()?;
        let amount = coupon.validate(&subtotal, now)?;
        self.coupon = Some(AppliedCoupon::from_coupon(coupon, amount));
        self.updated_at = current_timestamp();
        Ok(amount)
    }

    /// Remove the applied coupon, if any.
    pub fn remove_coupon(&mut self) -> bool {
        let removed = self.coupon.take().is_some();
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Get a line item by menu item ID.
    pub fn get_item(&self, item_id: &MenuItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.item_id == item_id)
    }

    /// True iff items from more than one restaurant are present.
    pub fn has_mixed_restaurants(&self) -> bool {
        let restaurants: HashSet<&RestaurantId> =
            self.items.iter().map(|line| &line.restaurant_id).collect();
        restaurants.len() > 1
    }

    /// The restaurant the cart's first line item came from.
    ///
    /// `None` for an empty cart. Not meaningful while
    /// [`Cart::has_mixed_restaurants`] is true.
    pub fn current_restaurant(&self) -> Option<RestaurantRef> {
        self.items.first().map(|line| RestaurantRef {
            id: line.restaurant_id.clone(),
            name: line.restaurant_name.clone(),
        })
    }

    /// Sum of line totals before discounts. Zero for an empty cart.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self.pricing_config.currency;
        self.items
            .iter()
            .try_fold(Money::zero(currency), |acc, line| {
                let line_total = line.line_total().ok_or(CommerceError::Overflow)?;
                if line_total.currency != currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: currency.code().to_string(),
                        got: line_total.currency.code().to_string(),
                    });
                }
                acc.checked_add(&line_total).ok_or(CommerceError::Overflow)
            })
    }

    /// Delivery fee under the configured policy. Zero for an empty cart.
    pub fn delivery_fee(&self) -> Money {
        match self.current_restaurant() {
            Some(restaurant) => self.pricing_config.delivery_fee.fee_for(&restaurant.id),
            None => Money::zero(self.pricing_config.currency),
        }
    }

    /// Tax on the subtotal, rounded half-up to the cent.
    pub fn tax_amount(&self) -> Result<Money, CommerceError> {
        Ok(self
            .subtotal()?
            .percentage_bps(self.pricing_config.tax_rate_bps))
    }

    /// Final total: subtotal - discount + delivery fee + tax.
    ///
    /// Composed from the already-rounded components, so with no coupon
    /// applied `total == subtotal + delivery_fee + tax_amount` exactly.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(self.pricing()?.grand_total)
    }

    /// Complete pricing breakdown for display and order submission.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let currency = self.pricing_config.currency;
        let subtotal = self.subtotal()?;
        let discount_total = self
            .coupon
            .as_ref()
            .map(|applied| applied.amount)
            .unwrap_or_else(|| Money::zero(currency));
        let delivery_fee = self.delivery_fee();
        let tax_total = subtotal.percentage_bps(self.pricing_config.tax_rate_bps);

        let grand_total = subtotal
            .checked_sub(&discount_total)
            .and_then(|m| m.checked_add(&delivery_fee))
            .and_then(|m| m.checked_add(&tax_total))
            .ok_or(CommerceError::Overflow)?;

        let line_items = self
            .items
            .iter()
            .map(|line| {
                Ok(LineItemPricing {
                    item_id: line.item_id.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    line_total: line.line_total().ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(CartPricing {
            subtotal,
            discount_total,
            delivery_fee,
            tax_total,
            grand_total,
            line_items,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

/// The restaurant a cart's contents came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantRef {
    pub id: RestaurantId,
    pub name: String,
}

/// One catalog entry plus quantity inside a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Menu item being purchased.
    pub item_id: MenuItemId,
    /// Item name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Money,
    /// Quantity, always >= 1.
    pub quantity: i64,
    /// Owning restaurant.
    pub restaurant_id: RestaurantId,
    /// Restaurant name (denormalized for display).
    pub restaurant_name: String,
    /// Unix timestamp when first added.
    pub added_at: i64,
    /// Free-text instructions for the kitchen.
    pub special_instructions: Option<String>,
}

impl LineItem {
    /// Line total (unit_price * quantity), None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::AddressId;
    use crate::money::Currency;

    fn restaurant(id: &str, name: &str) -> Restaurant {
        Restaurant::new(RestaurantId::new(id), name)
    }

    fn menu_item(id: &str, restaurant_id: &str, name: &str, cents: i64) -> MenuItem {
        MenuItem::new(
            MenuItemId::new(id),
            RestaurantId::new(restaurant_id),
            name,
            Money::new(cents, Currency::USD),
        )
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress {
            id: AddressId::new("addr-1"),
            label: "Home".to_string(),
            street_address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62704".to_string(),
            instructions: None,
        }
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap().cents, 0);
        assert_eq!(cart.delivery_fee().cents, 0);
        assert_eq!(cart.tax_amount().unwrap().cents, 0);
        assert_eq!(cart.total().unwrap().cents, 0);
        assert!(cart.current_restaurant().is_none());
    }

    #[test]
    fn test_add_same_item_increments_quantity() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        let item = menu_item("a", "rest-1", "Margherita", 1299);

        cart.add_item(&item, &r);
        cart.add_item(&item, &r);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal().unwrap().cents, 2598);
    }

    #[test]
    fn test_add_item_first_write_wins() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        let original = menu_item("a", "rest-1", "Margherita", 1299);
        // Same catalog id seen again with a different name and price.
        let repriced = menu_item("a", "rest-1", "Margherita (new)", 1499);

        cart.add_item(&original, &r);
        cart.add_item(&repriced, &r);

        let line = cart.get_item(&MenuItemId::new("a")).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Margherita");
        assert_eq!(line.unit_price.cents, 1299);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let r = restaurant("rest-1", "Trattoria Roma");
        let item = menu_item("a", "rest-1", "Margherita", 1299);

        let mut removed = Cart::default();
        removed.add_item(&item, &r);
        removed.remove_item(&MenuItemId::new("a"));

        let mut zeroed = Cart::default();
        zeroed.add_item(&item, &r);
        zeroed.set_quantity(&MenuItemId::new("a"), 0);

        assert_eq!(removed.items, zeroed.items);
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_set_quantity_replaces_in_place() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        cart.add_item(&menu_item("a", "rest-1", "Margherita", 1299), &r);

        assert!(cart.set_quantity(&MenuItemId::new("a"), 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_ops_on_absent_item_are_noops() {
        let mut cart = Cart::default();
        assert!(!cart.remove_item(&MenuItemId::new("ghost")));
        assert!(!cart.set_quantity(&MenuItemId::new("ghost"), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_order_independent() {
        let ra = restaurant("rest-1", "Trattoria Roma");
        let pizza = menu_item("a", "rest-1", "Margherita", 1299);
        let pasta = menu_item("b", "rest-1", "Carbonara", 1550);

        let mut forward = Cart::default();
        forward.add_item(&pizza, &ra);
        forward.add_item(&pizza, &ra);
        forward.add_item(&pasta, &ra);

        let mut reversed = Cart::default();
        reversed.add_item(&pasta, &ra);
        reversed.add_item(&pizza, &ra);
        reversed.add_item(&pizza, &ra);

        assert_eq!(
            forward.subtotal().unwrap(),
            reversed.subtotal().unwrap()
        );
        assert_eq!(forward.total().unwrap(), reversed.total().unwrap());
    }

    #[test]
    fn test_total_identity() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        cart.add_item(&menu_item("a", "rest-1", "Margherita", 1299), &r);
        cart.add_item(&menu_item("b", "rest-1", "Carbonara", 1550), &r);
        cart.set_quantity(&MenuItemId::new("a"), 3);

        let expected = cart.subtotal().unwrap() + cart.delivery_fee() + cart.tax_amount().unwrap();
        assert_eq!(cart.total().unwrap(), expected);
    }

    #[test]
    fn test_scenario_b_totals() {
        // add {id:"a", price:12.99} twice -> quantity 2, subtotal 25.98
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        let item = menu_item("a", "rest-1", "Margherita", 1299);
        cart.add_item(&item, &r);
        cart.add_item(&item, &r);

        assert_eq!(cart.get_item(&item.id).unwrap().quantity, 2);
        assert_eq!(cart.subtotal().unwrap(), Money::from_decimal(25.98, Currency::USD));
        assert_eq!(cart.delivery_fee().cents, 299);
        // 8% of 25.98 = 2.0784 -> 2.08
        assert_eq!(cart.tax_amount().unwrap().cents, 208);
        assert_eq!(cart.total().unwrap().cents, 2598 + 299 + 208);
    }

    #[test]
    fn test_mixed_restaurants_detected_not_prevented() {
        let mut cart = Cart::default();
        let r1 = restaurant("rest-1", "Trattoria Roma");
        let r2 = restaurant("rest-2", "Sushi Kan");
        cart.add_item(&menu_item("a", "rest-1", "Margherita", 1299), &r1);
        assert!(!cart.has_mixed_restaurants());

        cart.add_item(&menu_item("x", "rest-2", "Nigiri Set", 2200), &r2);
        assert!(cart.has_mixed_restaurants());
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_single_restaurant_never_flags_mixed() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        for id in ["a", "b", "c"] {
            cart.add_item(&menu_item(id, "rest-1", "Dish", 1000), &r);
        }
        assert!(!cart.has_mixed_restaurants());
        let current = cart.current_restaurant().unwrap();
        assert_eq!(current.id, RestaurantId::new("rest-1"));
        assert_eq!(current.name, "Trattoria Roma");
    }

    #[test]
    fn test_clear_keeps_address() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        cart.add_item(&menu_item("a", "rest-1", "Margherita", 1299), &r);
        cart.set_delivery_address(Some(address()));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.delivery_address.is_some());
        assert!(cart.coupon.is_none());
    }

    #[test]
    fn test_clear_then_readd_matches_totals() {
        let r = restaurant("rest-1", "Trattoria Roma");
        let pizza = menu_item("a", "rest-1", "Margherita", 1299);
        let pasta = menu_item("b", "rest-1", "Carbonara", 1550);

        let mut cart = Cart::default();
        cart.add_item(&pizza, &r);
        cart.add_item(&pizza, &r);
        cart.add_item(&pasta, &r);
        let before = cart.pricing().unwrap();

        cart.clear();
        cart.add_item(&pizza, &r);
        cart.add_item(&pizza, &r);
        cart.add_item(&pasta, &r);
        let after = cart.pricing().unwrap();

        assert_eq!(before.subtotal, after.subtotal);
        assert_eq!(before.tax_total, after.tax_total);
        assert_eq!(before.grand_total, after.grand_total);
    }

    #[test]
    fn test_coupon_discount_in_pricing() {
        let mut cart = Cart::default();
        let r = restaurant("rest-1", "Trattoria Roma");
        cart.add_item(&menu_item("a", "rest-1", "Margherita", 1299), &r);
        cart.set_quantity(&MenuItemId::new("a"), 2); // subtotal 25.98

        let coupon = Coupon::percentage("SAVE10", 1000);
        let discount = cart.apply_coupon(&coupon, 1_700_000_000).unwrap();
        assert_eq!(discount.cents, 260); // 10% of 25.98, half-up

        let pricing = cart.pricing().unwrap();
        assert!(pricing.has_discount());
        assert_eq!(
            pricing.grand_total,
            pricing.subtotal - pricing.discount_total + pricing.delivery_fee + pricing.tax_total
        );
    }
}
