//! Shopping cart module.
//!
//! Contains the single-restaurant cart and its line items.

mod cart;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};
