//! Restaurant and menu item types.

use crate::catalog::Country;
use crate::ids::{MenuItemId, RestaurantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A single dish on a restaurant's menu.
///
/// Owned by exactly one restaurant; immutable after catalog load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique menu item identifier.
    pub id: MenuItemId,
    /// Dish name.
    pub name: String,
    /// Unit price in the restaurant's currency.
    pub price: Money,
    /// Short description for listings.
    pub description: String,
    /// Menu section (e.g., "Main Course").
    pub category: String,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
        }
    }
}

/// A restaurant in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: RestaurantId,
    /// Restaurant name.
    pub name: String,
    /// Cuisine label (e.g., "Indian").
    pub cuisine: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Delivery time estimate (e.g., "30-45 min").
    pub delivery_time: String,
    /// Country partition this restaurant belongs to.
    pub country: Country,
    /// Menu in catalog order.
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Look up a menu item by ID.
    pub fn menu_item(&self, item_id: &MenuItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|i| &i.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_restaurant() -> Restaurant {
        Restaurant {
            id: RestaurantId::new("1"),
            name: "Spice Palace".to_string(),
            cuisine: "Indian".to_string(),
            rating: 4.5,
            delivery_time: "30-45 min".to_string(),
            country: Country::India,
            menu: vec![MenuItem::new(
                "1",
                "Butter Chicken",
                Money::from_decimal(299.0, Currency::INR),
                "Creamy tomato-based curry",
                "Main Course",
            )],
        }
    }

    #[test]
    fn test_menu_item_lookup() {
        let restaurant = sample_restaurant();
        let item = restaurant.menu_item(&MenuItemId::new("1")).unwrap();
        assert_eq!(item.name, "Butter Chicken");
        assert!(restaurant.menu_item(&MenuItemId::new("99")).is_none());
    }
}
