//! The fixed credential directory.
//!
//! A typed mapping from email to (identity, password) with first-match,
//! single-credential-per-identity semantics. Lookup failure and password
//! mismatch are indistinguishable to the caller, and the comparison work is
//! equalized so neither content nor timing leaks which emails exist.

use crate::error::AuthError;
use crate::identity::{Identity, Role};
use foodie_commerce::catalog::Country;

/// Password compared against when the email is unknown, so authentication
/// does the same amount of work either way.
const DUMMY_PASSWORD: &str = "correct-horse-battery-staple";

struct DirectoryEntry {
    identity: Identity,
    password: String,
}

/// Directory of known credentials.
pub struct CredentialDirectory {
    entries: Vec<DirectoryEntry>,
}

impl CredentialDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an identity with its single valid password.
    pub fn register(&mut self, identity: Identity, password: impl Into<String>) {
        self.entries.push(DirectoryEntry {
            identity,
            password: password.into(),
        });
    }

    /// Match credentials against the directory.
    ///
    /// First matching email wins. Unknown email and wrong password both
    /// return `AuthenticationFailed`.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let entry = self.entries.iter().find(|e| e.identity.email == email);
        let stored = entry.map(|e| e.password.as_str()).unwrap_or(DUMMY_PASSWORD);
        let matched = constant_time_compare(stored.as_bytes(), password.as_bytes());

        match entry {
            Some(entry) if matched => Ok(entry.identity.clone()),
            _ => Err(AuthError::AuthenticationFailed),
        }
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The demonstration directory shipped with the app.
    pub fn demo() -> Self {
        let mut directory = Self::new();
        directory.register(
            Identity::new("1", "Admin User", "admin@example.com", Role::Admin, Country::India),
            "admin123",
        );
        directory.register(
            Identity::new(
                "2",
                "Manager India",
                "manager.india@example.com",
                Role::Manager,
                Country::India,
            ),
            "manager123",
        );
        directory.register(
            Identity::new(
                "3",
                "Manager America",
                "manager.america@example.com",
                Role::Manager,
                Country::America,
            ),
            "manager123",
        );
        directory.register(
            Identity::new(
                "4",
                "Member India",
                "member.india@example.com",
                Role::Member,
                Country::India,
            ),
            "member123",
        );
        directory.register(
            Identity::new(
                "5",
                "Member America",
                "member.america@example.com",
                Role::Member,
                Country::America,
            ),
            "member123",
        );
        directory
    }
}

impl Default for CredentialDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Constant-time comparison to prevent timing attacks.
///
/// Scans to the longer length instead of returning early on a length
/// mismatch, so comparison time does not depend on where inputs diverge.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    let mut result = u8::from(a.len() != b.len());
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        result |= x ^ y;
    }
    result == 0
}
