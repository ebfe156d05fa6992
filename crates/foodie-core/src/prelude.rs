//! Prelude for convenient imports.

pub use crate::{AppError, FoodieApp};

pub use foodie_auth::{Action, AuthError, CredentialDirectory, Identity, MemorySlot, Role, SessionSlot};

pub use foodie_commerce::cart::{Cart, CartLine};
pub use foodie_commerce::catalog::{Catalog, Country, MenuItem, Restaurant};
pub use foodie_commerce::ids::{MenuItemId, OrderId, PaymentMethodId, RestaurantId, UserId};
pub use foodie_commerce::money::{Currency, Money};
pub use foodie_commerce::order::{Order, OrderBook, OrderLine, OrderStatus};
pub use foodie_commerce::payment::{
    PaymentKind, PaymentMethod, PaymentMethodDraft, PaymentMethodRegistry,
};
pub use foodie_commerce::CommerceError;
