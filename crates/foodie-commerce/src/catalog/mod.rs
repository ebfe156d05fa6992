//! Restaurant catalog module.
//!
//! Contains types for countries, restaurants, and menu items. Catalog data
//! is loaded once at process start and never mutated.

mod catalog;
mod country;
mod restaurant;

pub use catalog::Catalog;
pub use country::Country;
pub use restaurant::{MenuItem, Restaurant};
