//! Error type for the application facade.

use foodie_auth::AuthError;
use foodie_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by facade operations.
///
/// Everything here is recoverable; the facade never terminates the process
/// and a failed call leaves all entities unchanged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Authentication or authorization failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Domain rule violation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl AppError {
    /// Check if this is a permission denial.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AppError::Auth(e) if e.is_forbidden())
    }

    /// Check if this is a failed login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::Auth(e) if e.is_auth_failure())
    }
}
