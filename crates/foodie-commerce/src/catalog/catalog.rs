//! The read-only restaurant catalog.

use crate::catalog::{Country, MenuItem, Restaurant};
use crate::ids::{MenuItemId, RestaurantId};
use crate::money::{Currency, Money};

/// The restaurant catalog.
///
/// Loaded once at process start; the core never mutates it. Lookups and
/// filters are pure and preserve catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Create a catalog from a fixed set of restaurants.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// All restaurants, in catalog order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurants visible to a session bound to `country`, preserving
    /// catalog order.
    pub fn visible_for(&self, country: Country) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| r.country == country)
            .collect()
    }

    /// Look up a restaurant by ID.
    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// Look up a menu item within a restaurant.
    pub fn menu_item(
        &self,
        restaurant_id: &RestaurantId,
        item_id: &MenuItemId,
    ) -> Option<&MenuItem> {
        self.restaurant(restaurant_id)
            .and_then(|r| r.menu_item(item_id))
    }

    /// The demonstration catalog shipped with the app.
    pub fn demo() -> Self {
        Self::new(vec![
            Restaurant {
                id: RestaurantId::new("1"),
                name: "Spice Palace".to_string(),
                cuisine: "Indian".to_string(),
                rating: 4.5,
                delivery_time: "30-45 min".to_string(),
                country: Country::India,
                menu: vec![
                    MenuItem::new(
                        "1",
                        "Butter Chicken",
                        Money::from_decimal(299.0, Currency::INR),
                        "Creamy tomato-based curry",
                        "Main Course",
                    ),
                    MenuItem::new(
                        "2",
                        "Biryani",
                        Money::from_decimal(199.0, Currency::INR),
                        "Aromatic rice with spices",
                        "Main Course",
                    ),
                ],
            },
            Restaurant {
                id: RestaurantId::new("2"),
                name: "American Diner".to_string(),
                cuisine: "American".to_string(),
                rating: 4.2,
                delivery_time: "25-35 min".to_string(),
                country: Country::America,
                menu: vec![
                    MenuItem::new(
                        "3",
                        "Classic Burger",
                        Money::from_decimal(12.99, Currency::USD),
                        "Beef patty with fresh toppings",
                        "Main Course",
                    ),
                    MenuItem::new(
                        "4",
                        "Caesar Salad",
                        Money::from_decimal(8.99, Currency::USD),
                        "Fresh romaine with caesar dressing",
                        "Salads",
                    ),
                ],
            },
        ])
    }
}
