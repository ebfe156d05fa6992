//! Payment method types and field validation.

use crate::error::CommerceError;
use crate::ids::PaymentMethodId;
use serde::{Deserialize, Serialize};

/// Kind of payment instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// UPI handle.
    Upi,
    /// Digital wallet.
    Wallet,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Credit => "credit",
            PaymentKind::Debit => "debit",
            PaymentKind::Upi => "upi",
            PaymentKind::Wallet => "wallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentKind::Credit => "Credit Card",
            PaymentKind::Debit => "Debit Card",
            PaymentKind::Upi => "UPI",
            PaymentKind::Wallet => "Digital Wallet",
        }
    }

    /// Card kinds carry an expiry date; UPI handles and wallets do not.
    pub fn requires_expiry(&self) -> bool {
        matches!(self, PaymentKind::Credit | PaymentKind::Debit)
    }
}

/// A stored payment instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    /// Unique payment method identifier.
    pub id: PaymentMethodId,
    /// Kind of instrument.
    pub kind: PaymentKind,
    /// Display name (e.g., "Visa Credit Card").
    pub name: String,
    /// Last four digits of the card/account number.
    pub last_four: String,
    /// Expiry in `MM/YY` form; present for card kinds.
    pub expiry_date: Option<String>,
    /// Whether this is the default instrument.
    pub is_default: bool,
}

/// Input shape for adding or editing a payment method.
///
/// Validated before any registry mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodDraft {
    /// Kind of instrument.
    pub kind: PaymentKind,
    /// Display name.
    pub name: String,
    /// Last four digits.
    pub last_four: String,
    /// Expiry in `MM/YY` form; required for card kinds.
    pub expiry_date: Option<String>,
}

impl PaymentMethodDraft {
    /// Create a draft without an expiry date (UPI / wallet).
    pub fn new(
        kind: PaymentKind,
        name: impl Into<String>,
        last_four: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            last_four: last_four.into(),
            expiry_date: None,
        }
    }

    /// Set the expiry date.
    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry_date = Some(expiry.into());
        self
    }

    /// Validate all fields.
    ///
    /// - `name` must be non-empty
    /// - `last_four` must be exactly four ASCII digits for every kind
    /// - card kinds require a well-formed `MM/YY` expiry
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::Validation {
                field: "name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.last_four.len() != 4
            || !self.last_four.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CommerceError::Validation {
                field: "last_four".to_string(),
                reason: "must be exactly four digits".to_string(),
            });
        }

        if self.kind.requires_expiry() {
            match self.expiry_date.as_deref() {
                None => {
                    return Err(CommerceError::Validation {
                        field: "expiry_date".to_string(),
                        reason: format!("required for {} payment methods", self.kind.as_str()),
                    });
                }
                Some(expiry) if !is_valid_expiry(expiry) => {
                    return Err(CommerceError::Validation {
                        field: "expiry_date".to_string(),
                        reason: "must be in MM/YY form".to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// Check an `MM/YY` expiry string: two-digit month 01-12, slash, two-digit
/// year.
fn is_valid_expiry(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'/' {
        return false;
    }
    let digits_ok = s[..2].chars().all(|c| c.is_ascii_digit())
        && s[3..].chars().all(|c| c.is_ascii_digit());
    if !digits_ok {
        return false;
    }
    matches!(s[..2].parse::<u32>(), Ok(month) if (1..=12).contains(&month))
}
