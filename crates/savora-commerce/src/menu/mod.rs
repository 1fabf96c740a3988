//! Menu catalog module.
//!
//! Restaurants and the menu items they sell, mirrored from the upstream
//! catalog tables. These are read-side records; the backend owns them.

mod item;
mod restaurant;

pub use item::MenuItem;
pub use restaurant::Restaurant;
