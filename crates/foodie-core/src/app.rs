//! The application facade.

use crate::error::AppError;
use foodie_auth::{Action, CredentialDirectory, Identity, MemorySlot, SessionSlot, SessionStore};
use foodie_commerce::cart::Cart;
use foodie_commerce::catalog::{Catalog, Country, Restaurant};
use foodie_commerce::ids::{MenuItemId, OrderId, PaymentMethodId, RestaurantId};
use foodie_commerce::money::{Currency, Money};
use foodie_commerce::order::{Order, OrderBook};
use foodie_commerce::payment::{PaymentMethod, PaymentMethodDraft, PaymentMethodRegistry};
use foodie_commerce::CommerceError;

/// The session context for one running app.
///
/// Owns the session store, the read-only catalog, and the session's cart,
/// orders, and payment methods. Constructed once at process entry and
/// threaded into every caller; there is no ambient global state. Every
/// mutating operation consults the authorization policy before touching
/// anything, so a denied call is a no-op that reports `Forbidden`.
///
/// # Example
///
/// ```rust
/// use foodie_core::prelude::*;
///
/// let mut app = FoodieApp::demo();
/// app.restore();
/// assert!(app.current_identity().is_none());
///
/// let identity = app.login("admin@example.com", "admin123").unwrap();
/// assert_eq!(identity.role, Role::Admin);
/// assert_eq!(app.currency(), Some(Currency::INR));
/// ```
pub struct FoodieApp<S: SessionSlot = MemorySlot> {
    catalog: Catalog,
    session: SessionStore<S>,
    cart: Cart,
    orders: OrderBook,
    payments: PaymentMethodRegistry,
}

impl FoodieApp<MemorySlot> {
    /// The demonstration app: demo catalog, demo credential directory, and
    /// the demo payment methods, all in-memory.
    pub fn demo() -> Self {
        Self::new(Catalog::demo(), CredentialDirectory::demo(), MemorySlot::new())
            .with_payments(PaymentMethodRegistry::demo())
    }
}

impl<S: SessionSlot> FoodieApp<S> {
    /// Create an app over a catalog, credential directory, and session
    /// persistence slot.
    pub fn new(catalog: Catalog, directory: CredentialDirectory, slot: S) -> Self {
        Self {
            catalog,
            session: SessionStore::new(directory, slot),
            cart: Cart::default(),
            orders: OrderBook::new(),
            payments: PaymentMethodRegistry::new(),
        }
    }

    /// Seed the payment method registry.
    pub fn with_payments(mut self, payments: PaymentMethodRegistry) -> Self {
        self.payments = payments;
        self
    }

    // === Session ===

    /// Attempt to restore a persisted session. Invoked once at startup;
    /// malformed persisted state is discarded silently.
    pub fn restore(&mut self) -> Option<&Identity> {
        if let Some(identity) = self.session.restore() {
            let currency = identity.country.currency();
            tracing::info!(email = %identity.email, "session restored");
            self.cart = Cart::new(currency);
        }
        self.session.current_identity()
    }

    /// Log in and start a fresh session-scoped cart in the identity's
    /// currency.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AppError> {
        match self.session.login(email, password) {
            Ok(identity) => {
                self.cart = Cart::new(identity.country.currency());
                tracing::info!(
                    email = %identity.email,
                    role = identity.role.as_str(),
                    country = identity.country.as_str(),
                    "session opened"
                );
                Ok(identity)
            }
            Err(e) => {
                tracing::warn!("login failed");
                Err(e.into())
            }
        }
    }

    /// End the session: clears the identity, persisted state, and cart.
    /// Succeeds even with no active session.
    pub fn logout(&mut self) {
        self.session.logout();
        self.cart.clear();
        tracing::info!("session closed");
    }

    /// The active identity, or none.
    pub fn current_identity(&self) -> Option<&Identity> {
        self.session.current_identity()
    }

    /// The session's country, for presentation-layer formatting.
    pub fn country(&self) -> Option<Country> {
        self.current_identity().map(|i| i.country)
    }

    /// The session's currency convention, derived from its country.
    pub fn currency(&self) -> Option<Currency> {
        self.country().map(|c| c.currency())
    }

    /// Check whether the current session may perform an action, without
    /// attempting it. Lets callers hide controls the role cannot use.
    pub fn can(&self, action: Action) -> bool {
        self.session
            .current_identity()
            .map(|i| i.role.allows(action))
            .unwrap_or(false)
    }

    // === Catalog ===

    /// Restaurants visible to this session: exactly those in the session's
    /// country, in catalog order. Empty with no session.
    pub fn visible_restaurants(&self) -> Vec<&Restaurant> {
        match self.current_identity() {
            Some(identity) => self.catalog.visible_for(identity.country),
            None => Vec::new(),
        }
    }

    /// Look up a restaurant by ID.
    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.catalog.restaurant(id)
    }

    // === Cart ===

    /// Add one of a menu item to the cart.
    pub fn add_to_cart(
        &mut self,
        restaurant_id: &RestaurantId,
        item_id: &MenuItemId,
    ) -> Result<(), AppError> {
        self.authorize(Action::EditCart)?;

        let restaurant = self
            .catalog
            .restaurant(restaurant_id)
            .ok_or_else(|| CommerceError::RestaurantNotFound(restaurant_id.to_string()))?;
        let item = restaurant
            .menu_item(item_id)
            .ok_or_else(|| CommerceError::MenuItemNotFound(item_id.to_string()))?;

        self.cart.add_item(item, restaurant, 1)?;
        tracing::debug!(item = %item_id, "item added to cart");
        Ok(())
    }

    /// Set a cart line's quantity; zero or less removes the line.
    pub fn update_cart_quantity(
        &mut self,
        item_id: &MenuItemId,
        quantity: i64,
    ) -> Result<bool, AppError> {
        self.authorize(Action::EditCart)?;
        Ok(self.cart.update_quantity(item_id, quantity)?)
    }

    /// Remove a cart line; removing an absent item is a no-op.
    pub fn remove_from_cart(&mut self, item_id: &MenuItemId) -> Result<bool, AppError> {
        self.authorize(Action::EditCart)?;
        Ok(self.cart.remove_item(item_id))
    }

    /// The session's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total cart price in exact minor units.
    pub fn cart_total(&self) -> Result<Money, AppError> {
        Ok(self.cart.total_price()?)
    }

    // === Orders ===

    /// Create an order from the cart.
    ///
    /// Requires checkout permission and a non-empty cart. On success the
    /// cart snapshot becomes a `Pending` order and the cart is cleared; on
    /// any failure the cart is untouched.
    pub fn checkout(&mut self) -> Result<OrderId, AppError> {
        self.authorize(Action::Checkout)?;

        let estimated_delivery = self
            .cart
            .restaurant_id()
            .and_then(|id| self.catalog.restaurant(id))
            .map(|r| r.delivery_time.clone())
            .unwrap_or_default();

        let order_id = self.orders.place(&self.cart, estimated_delivery)?;
        self.cart.clear();
        tracing::info!(order = %order_id, "order placed");
        Ok(order_id)
    }

    /// Cancel an order, subject to role and status rules.
    pub fn cancel_order(&mut self, order_id: &OrderId) -> Result<(), AppError> {
        self.authorize(Action::CancelOrder)?;
        self.orders.cancel(order_id)?;
        tracing::info!(order = %order_id, "order cancelled");
        Ok(())
    }

    /// All orders placed this session, oldest first.
    pub fn orders(&self) -> &[Order] {
        self.orders.all()
    }

    /// Get an order by ID.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    // === Payment methods ===

    /// Stored payment methods. Listing is part of payment management and is
    /// gated with it.
    pub fn payment_methods(&self) -> Result<&[PaymentMethod], AppError> {
        self.authorize(Action::ManagePayments)?;
        Ok(self.payments.all())
    }

    /// Add a payment method.
    pub fn add_payment_method(
        &mut self,
        draft: PaymentMethodDraft,
    ) -> Result<PaymentMethodId, AppError> {
        self.authorize(Action::ManagePayments)?;
        let id = self.payments.add(draft)?;
        tracing::info!(method = %id, "payment method added");
        Ok(id)
    }

    /// Edit a payment method in place.
    pub fn update_payment_method(
        &mut self,
        id: &PaymentMethodId,
        draft: PaymentMethodDraft,
    ) -> Result<(), AppError> {
        self.authorize(Action::ManagePayments)?;
        self.payments.update(id, draft)?;
        tracing::info!(method = %id, "payment method updated");
        Ok(())
    }

    /// Remove a payment method.
    pub fn remove_payment_method(&mut self, id: &PaymentMethodId) -> Result<bool, AppError> {
        self.authorize(Action::ManagePayments)?;
        let removed = self.payments.remove(id);
        if removed {
            tracing::info!(method = %id, "payment method removed");
        }
        Ok(removed)
    }

    /// Make a payment method the single default.
    pub fn set_default_payment_method(
        &mut self,
        id: &PaymentMethodId,
    ) -> Result<(), AppError> {
        self.authorize(Action::ManagePayments)?;
        self.payments.set_default(id)?;
        tracing::info!(method = %id, "default payment method changed");
        Ok(())
    }

    // === Internals ===

    /// Route an attempted action through the policy table.
    fn authorize(&self, action: Action) -> Result<&Identity, AppError> {
        match foodie_auth::authorize(self.session.current_identity(), action) {
            Ok(identity) => Ok(identity),
            Err(e) => {
                tracing::warn!(action = action.as_str(), "action denied");
                Err(e.into())
            }
        }
    }
}
