//! Session store and its persistence slot.

use crate::directory::CredentialDirectory;
use crate::error::AuthError;
use crate::identity::Identity;

/// The session persistence boundary: a single named slot holding an opaque
/// payload or nothing.
///
/// Read once at startup, written on login, cleared on logout. What the
/// payload means is the store's business; implementations just keep bytes.
pub trait SessionSlot {
    /// Read the stored payload, if any.
    fn load(&self) -> Option<Vec<u8>>;
    /// Replace the stored payload.
    fn store(&mut self, payload: &[u8]);
    /// Remove the stored payload.
    fn clear(&mut self);
}

/// In-process slot, the default backing for a single-process session.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Option<Vec<u8>>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot already holding a payload, e.g. from a previous run.
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

impl SessionSlot for MemorySlot {
    fn load(&self) -> Option<Vec<u8>> {
        self.payload.clone()
    }

    fn store(&mut self, payload: &[u8]) {
        self.payload = Some(payload.to_vec());
    }

    fn clear(&mut self) {
        self.payload = None;
    }
}

/// The session store.
///
/// Holds the current authenticated identity (or none) and its lifecycle:
/// login binds and persists, logout clears unconditionally, restore reads
/// the slot once at process start.
pub struct SessionStore<S = MemorySlot> {
    directory: CredentialDirectory,
    slot: S,
    current: Option<Identity>,
}

impl<S: SessionSlot> SessionStore<S> {
    /// Create a store over a credential directory and persistence slot.
    pub fn new(directory: CredentialDirectory, slot: S) -> Self {
        Self {
            directory,
            slot,
            current: None,
        }
    }

    /// Authenticate and bind an identity.
    ///
    /// On success the identity is persisted to the slot and returned.
    /// Unknown email and wrong password fail identically.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = self.directory.authenticate(email, password)?;
        let payload = serde_json::to_vec(&identity)
            .map_err(|e| AuthError::Serialization(e.to_string()))?;
        self.slot.store(&payload);
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Clear the identity and persisted state.
    ///
    /// Succeeds even if no session exists.
    pub fn logout(&mut self) {
        self.current = None;
        self.slot.clear();
    }

    /// Attempt to load a previously persisted identity.
    ///
    /// Invoked once at process start. A malformed payload is discarded and
    /// the slot cleared; the caller just sees "no session".
    pub fn restore(&mut self) -> Option<&Identity> {
        match self.slot.load() {
            Some(payload) => match serde_json::from_slice::<Identity>(&payload) {
                Ok(identity) => {
                    self.current = Some(identity);
                }
                Err(_) => {
                    self.slot.clear();
                    self.current = None;
                }
            },
            None => {
                self.current = None;
            }
        }
        self.current.as_ref()
    }

    /// The active identity, or none.
    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Check if a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;
    use foodie_commerce::catalog::Country;

    fn store() -> SessionStore<MemorySlot> {
        SessionStore::new(CredentialDirectory::demo(), MemorySlot::new())
    }

    #[test]
    fn test_login_binds_and_persists() {
        let mut store = store();
        let identity = store.login("admin@example.com", "admin123").unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert!(store.is_authenticated());
        assert_eq!(
            store.current_identity().map(|i| i.email.as_str()),
            Some("admin@example.com")
        );
    }

    #[test]
    fn test_failed_login_leaves_identity_unset() {
        let mut store = store();
        assert!(store.login("admin@example.com", "nope").is_err());
        assert!(store.login("ghost@example.com", "admin123").is_err());
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn test_logout_is_unconditional() {
        let mut store = store();
        store.logout(); // no session yet

        store.login("admin@example.com", "admin123").unwrap();
        store.logout();
        assert!(store.current_identity().is_none());

        // The slot was cleared too: restore finds nothing.
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_round_trip() {
        let mut first = store();
        first.login("member.india@example.com", "member123").unwrap();
        let payload = first.slot.load().unwrap();

        // Next process start: same slot contents, fresh store.
        let mut second = SessionStore::new(
            CredentialDirectory::demo(),
            MemorySlot::with_payload(payload),
        );
        let restored = second.restore().unwrap();
        assert_eq!(restored.email, "member.india@example.com");
        assert_eq!(restored.country, Country::India);
    }

    #[test]
    fn test_restore_discards_malformed_payload() {
        let mut store = SessionStore::new(
            CredentialDirectory::demo(),
            MemorySlot::with_payload(&b"{not json"[..]),
        );
        assert!(store.restore().is_none());
        assert!(store.current_identity().is_none());

        // The bad payload was dropped from the slot as well.
        assert!(store.slot.load().is_none());
    }

    #[test]
    fn test_restore_with_empty_slot() {
        let mut store = store();
        assert!(store.restore().is_none());
    }
}
