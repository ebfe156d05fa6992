//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in food-ordering operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Restaurant not found.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Menu item not found.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Payment method not found.
    #[error("Payment method not found: {0}")]
    PaymentMethodNotFound(String),

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Cart already holds items from another restaurant.
    #[error("Cart holds items from {in_cart}; cannot add items from {attempted}")]
    CrossRestaurantConflict { in_cart: String, attempted: String },

    /// Invalid order state transition.
    #[error("Invalid order transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// A payment-method field failed validation.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}
