//! Authentication errors.

use crate::policy::Action;
use thiserror::Error;

/// Authentication and authorization error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Bad credentials. Unknown email and wrong password are deliberately
    /// indistinguishable.
    #[error("invalid credentials")]
    AuthenticationFailed,

    /// The session's role does not permit the attempted action.
    #[error("forbidden: {action} is not permitted for this session")]
    Forbidden { action: Action },

    /// Serialization error while persisting the session.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::AuthenticationFailed)
    }

    /// Check if this is a permission denial.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AuthError::Forbidden { .. })
    }
}
