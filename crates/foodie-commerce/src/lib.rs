//! Food-ordering domain types and logic for FoodieOrder.
//!
//! This crate provides the order-domain core of the platform:
//!
//! - **Catalog**: Restaurants and their menus, partitioned by country
//! - **Cart**: Single-restaurant cart with line items and exact pricing
//! - **Order**: Order lifecycle state machine from placement to delivery
//! - **Payment**: Stored payment methods with a single-default invariant
//!
//! # Example
//!
//! ```rust
//! use foodie_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let spice_palace = catalog
//!     .visible_for(Country::India)
//!     .into_iter()
//!     .next()
//!     .expect("demo catalog has an Indian restaurant");
//!
//! let mut cart = Cart::new(Country::India.currency());
//! let item = &spice_palace.menu[0];
//! cart.add_item(item, spice_palace, 1).unwrap();
//!
//! let total = cart.total_price().unwrap();
//! assert_eq!(total.currency, Currency::INR);
//! ```
//!
//! Authorization is deliberately not modeled here; the `foodie-auth` crate
//! owns roles and the permission table, and the `foodie-core` facade gates
//! every mutating call before it reaches these types.

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod order;
pub mod payment;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Country, MenuItem, Restaurant};

    // Cart
    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_ITEM};

    // Orders
    pub use crate::order::{Order, OrderBook, OrderLine, OrderStatus};

    // Payments
    pub use crate::payment::{
        PaymentKind, PaymentMethod, PaymentMethodDraft, PaymentMethodRegistry,
    };
}
