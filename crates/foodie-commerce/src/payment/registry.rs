//! Payment method registry.

use crate::error::CommerceError;
use crate::ids::PaymentMethodId;
use crate::payment::{PaymentKind, PaymentMethod, PaymentMethodDraft};

/// The set of stored payment methods.
///
/// Maintains the default-flag invariant: at most one method is default, and
/// the first method added to an empty registry becomes it. Methods are kept
/// private so the flag can only change through `set_default`.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethodRegistry {
    methods: Vec<PaymentMethod>,
}

impl PaymentMethodRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new payment method.
    ///
    /// Validates the draft, assigns a fresh ID, and makes the method the
    /// default if the registry was empty. Later additions are not default
    /// unless promoted explicitly via `set_default`.
    pub fn add(&mut self, draft: PaymentMethodDraft) -> Result<PaymentMethodId, CommerceError> {
        draft.validate()?;

        let method = PaymentMethod {
            id: PaymentMethodId::generate(),
            kind: draft.kind,
            name: draft.name,
            last_four: draft.last_four,
            expiry_date: draft.expiry_date,
            is_default: self.methods.is_empty(),
        };
        let id = method.id.clone();
        self.methods.push(method);
        Ok(id)
    }

    /// Replace the editable fields of an existing method.
    ///
    /// The ID and default flag are preserved.
    pub fn update(
        &mut self,
        id: &PaymentMethodId,
        draft: PaymentMethodDraft,
    ) -> Result<(), CommerceError> {
        draft.validate()?;

        let method = self
            .methods
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| CommerceError::PaymentMethodNotFound(id.to_string()))?;
        method.kind = draft.kind;
        method.name = draft.name;
        method.last_four = draft.last_four;
        method.expiry_date = draft.expiry_date;
        Ok(())
    }

    /// Remove a payment method. Removing an absent ID is a no-op.
    ///
    /// Removing the default leaves the registry with no default; no
    /// replacement is promoted automatically.
    pub fn remove(&mut self, id: &PaymentMethodId) -> bool {
        let len_before = self.methods.len();
        self.methods.retain(|m| &m.id != id);
        self.methods.len() < len_before
    }

    /// Make the given method the single default.
    ///
    /// The flag moves in one pass, so the registry never holds two defaults
    /// and never drops to zero on success. An unknown ID fails with
    /// `PaymentMethodNotFound` and leaves every flag untouched.
    pub fn set_default(&mut self, id: &PaymentMethodId) -> Result<(), CommerceError> {
        if !self.methods.iter().any(|m| &m.id == id) {
            return Err(CommerceError::PaymentMethodNotFound(id.to_string()));
        }
        for method in &mut self.methods {
            method.is_default = &method.id == id;
        }
        Ok(())
    }

    /// The current default method, if any.
    pub fn default_method(&self) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.is_default)
    }

    /// Get a method by ID.
    pub fn get(&self, id: &PaymentMethodId) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| &m.id == id)
    }

    /// All methods, in insertion order.
    pub fn all(&self) -> &[PaymentMethod] {
        &self.methods
    }

    /// Number of stored methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// The demonstration registry shipped with the app.
    pub fn demo() -> Self {
        let mut registry = Self::new();
        // First add becomes the default automatically.
        let _ = registry.add(
            PaymentMethodDraft::new(PaymentKind::Credit, "Visa Credit Card", "4532")
                .with_expiry("12/25"),
        );
        let _ = registry.add(PaymentMethodDraft::new(PaymentKind::Upi, "Google Pay", "9876"));
        registry
    }
}
