//! FoodieOrder application core.
//!
//! Wires the session store, authorization policy, and order domain into a
//! single explicitly-owned session context: [`FoodieApp`]. Callers (pages,
//! components, tests) construct one app at process entry, `restore()` any
//! persisted session, and invoke the operations it exposes; the app gates
//! every mutating call through the policy table and reports denials as
//! recoverable errors.
//!
//! The core never formats currency strings or timestamps; it exposes the
//! session's country and raw minor-unit amounts so a presentation layer can
//! do that.
//!
//! # Quick Start
//!
//! ```rust
//! use foodie_core::prelude::*;
//!
//! let mut app = FoodieApp::demo();
//! app.login("manager.india@example.com", "manager123").unwrap();
//!
//! let restaurant_id = app.visible_restaurants()[0].id.clone();
//! let item_id = app.visible_restaurants()[0].menu[0].id.clone();
//! app.add_to_cart(&restaurant_id, &item_id).unwrap();
//!
//! let order_id = app.checkout().unwrap();
//! assert!(app.cart().is_empty());
//! assert!(app.order(&order_id).is_some());
//! ```

mod app;
mod error;

pub mod prelude;

pub use app::FoodieApp;
pub use error::AppError;
