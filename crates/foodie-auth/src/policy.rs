//! The authorization policy table.
//!
//! One pure, deterministic predicate set mapping (role, action) to
//! allow/deny. Every mutating entry point routes through `authorize`
//! instead of re-deriving permission logic at the call site.

use crate::error::AuthError;
use crate::identity::{Identity, Role};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An action a session may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Browse restaurants and menus.
    ViewCatalog,
    /// Add to or change the cart.
    EditCart,
    /// Create an order from the cart.
    Checkout,
    /// Cancel a pending or confirmed order.
    CancelOrder,
    /// Add, edit, remove, or re-default payment methods.
    ManagePayments,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewCatalog => "view_catalog",
            Action::EditCart => "edit_cart",
            Action::Checkout => "checkout",
            Action::CancelOrder => "cancel_order",
            Action::ManagePayments => "manage_payments",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// The permission table.
    ///
    /// | Action          | admin | manager | member |
    /// |-----------------|-------|---------|--------|
    /// | ViewCatalog     |  yes  |   yes   |  yes   |
    /// | EditCart        |  yes  |   yes   |  yes   |
    /// | Checkout        |  yes  |   yes   |  no    |
    /// | CancelOrder     |  yes  |   yes   |  no    |
    /// | ManagePayments  |  yes  |   no    |  no    |
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::ViewCatalog | Action::EditCart => true,
            Action::Checkout | Action::CancelOrder => {
                matches!(self, Role::Admin | Role::Manager)
            }
            Action::ManagePayments => matches!(self, Role::Admin),
        }
    }
}

/// Check that the current session may perform `action`.
///
/// A missing session and an insufficient role both deny with `Forbidden`;
/// the check never mutates anything.
pub fn authorize(identity: Option<&Identity>, action: Action) -> Result<&Identity, AuthError> {
    match identity {
        Some(identity) if identity.role.allows(action) => Ok(identity),
        _ => Err(AuthError::Forbidden { action }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodie_commerce::catalog::Country;

    fn identity(role: Role) -> Identity {
        Identity::new("1", "Test User", "test@example.com", role, Country::India)
    }

    #[test]
    fn test_everyone_can_browse_and_edit_cart() {
        for role in [Role::Admin, Role::Manager, Role::Member] {
            assert!(role.allows(Action::ViewCatalog));
            assert!(role.allows(Action::EditCart));
        }
    }

    #[test]
    fn test_member_cannot_checkout_or_cancel() {
        assert!(!Role::Member.allows(Action::Checkout));
        assert!(!Role::Member.allows(Action::CancelOrder));

        assert!(Role::Admin.allows(Action::Checkout));
        assert!(Role::Manager.allows(Action::Checkout));
        assert!(Role::Admin.allows(Action::CancelOrder));
        assert!(Role::Manager.allows(Action::CancelOrder));
    }

    #[test]
    fn test_only_admin_manages_payments() {
        assert!(Role::Admin.allows(Action::ManagePayments));
        assert!(!Role::Manager.allows(Action::ManagePayments));
        assert!(!Role::Member.allows(Action::ManagePayments));
    }

    #[test]
    fn test_authorize_allows_permitted_role() {
        let admin = identity(Role::Admin);
        let granted = authorize(Some(&admin), Action::ManagePayments).unwrap();
        assert_eq!(granted.role, Role::Admin);
    }

    #[test]
    fn test_authorize_denies_insufficient_role() {
        let member = identity(Role::Member);
        let err = authorize(Some(&member), Action::Checkout).unwrap_err();
        assert!(matches!(
            err,
            AuthError::Forbidden {
                action: Action::Checkout
            }
        ));
    }

    #[test]
    fn test_authorize_denies_missing_session() {
        let err = authorize(None, Action::ViewCatalog).unwrap_err();
        assert!(err.is_forbidden());
    }
}
