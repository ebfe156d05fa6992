//! Append-only order book.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::order::{Order, OrderLine, OrderStatus};

/// The set of orders placed in this session.
///
/// Orders are only ever appended and transitioned; they are never removed.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Create an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new order from a cart snapshot.
    ///
    /// Requires a non-empty cart. The new order starts `Pending`; the cart
    /// itself is left untouched (clearing it on success is the caller's
    /// side of the contract).
    pub fn place(
        &mut self,
        cart: &Cart,
        estimated_delivery: impl Into<String>,
    ) -> Result<OrderId, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let total = cart.total_price()?;
        let mut items = Vec::with_capacity(cart.lines().len());
        for line in cart.lines() {
            let line_total = line
                .unit_price
                .try_multiply(line.quantity)
                .ok_or(CommerceError::Overflow)?;
            items.push(OrderLine {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total,
            });
        }

        let now = current_timestamp();
        let order = Order {
            id: OrderId::generate(),
            restaurant_name: cart.restaurant_name().unwrap_or_default().to_string(),
            items,
            total,
            status: OrderStatus::Pending,
            created_at: now,
            estimated_delivery: estimated_delivery.into(),
            updated_at: now,
            cancelled_at: None,
        };
        let id = order.id.clone();
        self.orders.push(order);
        Ok(id)
    }

    /// Cancel an order, subject to the status rules.
    pub fn cancel(&mut self, id: &OrderId) -> Result<(), CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;
        order.cancel()
    }

    /// Advance an order one step along the happy path.
    ///
    /// This is the restaurant-side progression; it is not a session-gated
    /// operation.
    pub fn advance(&mut self, id: &OrderId) -> Result<OrderStatus, CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;
        order.advance()
    }

    /// Get an order by ID.
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// All orders, oldest first.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
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
