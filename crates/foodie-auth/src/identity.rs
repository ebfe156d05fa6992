//! Identity and role types.

use foodie_commerce::catalog::Country;
use foodie_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role for authorization.
///
/// Roles are not a hierarchy; what each one permits is spelled out in the
/// policy table (`Role::allows`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including payment method management.
    Admin,
    /// Can checkout and cancel orders.
    Manager,
    /// Can browse and build a cart only.
    #[default]
    Member,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            _ => Err(()),
        }
    }
}

/// An authenticated user.
///
/// Exactly one identity is active per session, or none. Created on
/// successful login, destroyed on logout, persisted opaquely across
/// restarts by the session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, the login key.
    pub email: String,
    /// Role determining permitted actions.
    pub role: Role,
    /// Country partition this session is scoped to.
    pub country: Country,
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        country: Country,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            country,
        }
    }
}
