//! Cart and line item types.

use crate::catalog::{MenuItem, Restaurant};
use crate::error::CommerceError;
use crate::ids::{MenuItemId, RestaurantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Menu item being ordered.
    pub item_id: MenuItemId,
    /// Dish name (denormalized for display).
    pub name: String,
    /// Unit price at the time the item was added.
    pub unit_price: Money,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,
    /// Restaurant the item belongs to.
    pub restaurant_id: RestaurantId,
    /// Restaurant name (denormalized for display).
    pub restaurant_name: String,
}

/// A shopping cart.
///
/// Lines are keyed by menu item ID (unique) and all lines in a non-empty
/// cart belong to one restaurant. The line list is private so those two
/// invariants can only be changed through the operations below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
    created_at: i64,
    updated_at: i64,
}

impl Cart {
    /// Create a new empty cart in the given currency.
    pub fn new(currency: Currency) -> Self {
        let now = current_timestamp();
        Self {
            lines: Vec::new(),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add `quantity` of a menu item to the cart.
    ///
    /// Inserts a new line at that quantity, or increments the existing one.
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The cart already holds items from a different restaurant
    /// - The item's currency differs from the cart's
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    ///
    /// Validation happens before any mutation; a failed call leaves the
    /// cart unchanged.
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        restaurant: &Restaurant,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        // Single-restaurant invariant: adding from a second restaurant is
        // rejected, never clear-and-replace.
        if let Some(first) = self.lines.first() {
            if first.restaurant_id != restaurant.id {
                return Err(CommerceError::CrossRestaurantConflict {
                    in_cart: first.restaurant_name.clone(),
                    attempted: restaurant.name.clone(),
                });
            }
        }

        if item.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: item.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            self.updated_at = current_timestamp();
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.lines.push(CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.price,
            quantity,
            restaurant_id: restaurant.id.clone(),
            restaurant_name: restaurant.name.clone(),
        });
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line
    /// was updated or removed.
    pub fn update_quantity(
        &mut self,
        item_id: &MenuItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(item_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.item_id == item_id) {
            line.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove a line from the cart. Removing an absent item is a no-op.
    pub fn remove_item(&mut self, item_id: &MenuItemId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.item_id != item_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Empty the cart. Used after checkout and on logout.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.updated_at = current_timestamp();
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price as exact minor units; no intermediate rounding.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for line in &self.lines {
            let line_total = line
                .unit_price
                .try_multiply(line.quantity)
                .ok_or(CommerceError::Overflow)?;
            total = total.try_add(&line_total).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by menu item ID.
    pub fn get(&self, item_id: &MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.item_id == item_id)
    }

    /// The restaurant this cart belongs to, if non-empty.
    pub fn restaurant_id(&self) -> Option<&RestaurantId> {
        self.lines.first().map(|l| &l.restaurant_id)
    }

    /// The restaurant name, if non-empty.
    pub fn restaurant_name(&self) -> Option<&str> {
        self.lines.first().map(|l| l.restaurant_name.as_str())
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
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
