//! Order types and the status state machine.

use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Happy path is linear: `Pending -> Confirmed -> Preparing -> Delivered`.
/// Cancellation branches off from `Pending` or `Confirmed` only;
/// `Delivered` and `Cancelled` admit no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed by the restaurant.
    Confirmed,
    /// Order being prepared.
    Preparing,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order can still be cancelled from this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Check if no transition of any kind remains.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// The next status on the happy path, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

/// A line item snapshotted into an order at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Dish name at time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
    /// Total for this line.
    pub line_total: Money,
}

/// An order placed from a checked-out cart.
///
/// Immutable except for its status, which moves only through the allowed
/// transitions. Orders are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Restaurant name at time of order.
    pub restaurant_name: String,
    /// Snapshotted line items.
    pub items: Vec<OrderLine>,
    /// Grand total charged.
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Delivery estimate at time of order (e.g., "30-45 min").
    pub estimated_delivery: String,
    /// Unix timestamp of last status change.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Advance one step along the happy path.
    ///
    /// Fails with `InvalidTransition` from `Delivered` or `Cancelled`.
    pub fn advance(&mut self) -> Result<OrderStatus, CommerceError> {
        let next = self.status.next().ok_or(CommerceError::InvalidTransition {
            from: self.status.as_str().to_string(),
            to: "next".to_string(),
        })?;
        self.status = next;
        self.updated_at = current_timestamp();
        Ok(next)
    }

    /// Cancel the order.
    ///
    /// Only `Pending` and `Confirmed` orders can be cancelled; any other
    /// status fails with `InvalidTransition` and leaves the order unchanged.
    pub fn cancel(&mut self) -> Result<(), CommerceError> {
        if !self.status.can_cancel() {
            return Err(CommerceError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: OrderStatus::Cancelled.as_str().to_string(),
            });
        }
        self.status = OrderStatus::Cancelled;
        let now = current_timestamp();
        self.cancelled_at = Some(now);
        self.updated_at = now;
        Ok(())
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
    use crate::money::Currency;

    fn pending_order() -> Order {
        Order {
            id: OrderId::generate(),
            restaurant_name: "Spice Palace".to_string(),
            items: vec![OrderLine {
                name: "Butter Chicken".to_string(),
                quantity: 2,
                unit_price: Money::new(29900, Currency::INR),
                line_total: Money::new(59800, Currency::INR),
            }],
            total: Money::new(59800, Currency::INR),
            status: OrderStatus::Pending,
            created_at: 0,
            estimated_delivery: "30-45 min".to_string(),
            updated_at: 0,
            cancelled_at: None,
        }
    }

    #[test]
    fn test_status_can_cancel() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::Confirmed.can_cancel());
        assert!(!OrderStatus::Preparing.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }

    #[test]
    fn test_happy_path_is_linear() {
        let mut order = pending_order();
        assert_eq!(order.advance().unwrap(), OrderStatus::Confirmed);
        assert_eq!(order.advance().unwrap(), OrderStatus::Preparing);
        assert_eq!(order.advance().unwrap(), OrderStatus::Delivered);
        assert!(order.advance().is_err());
    }

    #[test]
    fn test_cancel_pending_succeeds() {
        let mut order = pending_order();
        order.cancel().unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.cancelled_at.is_some());
    }

    #[test]
    fn test_cancel_confirmed_succeeds() {
        let mut order = pending_order();
        order.advance().unwrap();
        order.cancel().unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_cancel_preparing_fails() {
        let mut order = pending_order();
        order.advance().unwrap();
        order.advance().unwrap();
        let err = order.cancel().unwrap_err();
        assert!(matches!(err, CommerceError::InvalidTransition { .. }));
        assert_eq!(order.status, OrderStatus::Preparing);
    }

    #[test]
    fn test_cancel_is_not_reentrant() {
        let mut order = pending_order();
        order.cancel().unwrap();
        let err = order.cancel().unwrap_err();
        assert!(matches!(err, CommerceError::InvalidTransition { .. }));
        assert!(order.advance().is_err());
    }

    #[test]
    fn test_item_count() {
        let order = pending_order();
        assert_eq!(order.item_count(), 2);
    }
}
