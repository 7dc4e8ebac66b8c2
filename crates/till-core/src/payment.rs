//! # Payment Methods
//!
//! The closed set of payment methods a checkout can settle with.
//! Payment kinds carry no state; resolution from a user-supplied label is a
//! pure function over a fixed table.

use crate::error::{PosError, PosResult};
use serde::{Deserialize, Serialize};

/// A payment method attached to a completed order.
///
/// Labels only: no gateway interaction happens anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Cash,
    CreditCard,
    DebitCard,
    Gcash,
}

impl PaymentKind {
    /// Every supported payment method, in prompt order.
    pub const ALL: [PaymentKind; 4] = [
        PaymentKind::Cash,
        PaymentKind::CreditCard,
        PaymentKind::DebitCard,
        PaymentKind::Gcash,
    ];

    /// Display label, as printed on receipts and in the order log.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Cash => "Cash",
            PaymentKind::CreditCard => "Credit Card",
            PaymentKind::DebitCard => "Debit Card",
            PaymentKind::Gcash => "GCash",
        }
    }

    /// Resolve a user-supplied label to a payment kind.
    ///
    /// Matching is case-insensitive but otherwise exact: no trimming and no
    /// partial matches. Unknown labels are rejected so the caller can
    /// re-prompt.
    pub fn resolve(label: &str) -> PosResult<Self> {
        match label.to_lowercase().as_str() {
            "cash" => Ok(PaymentKind::Cash),
            "credit card" => Ok(PaymentKind::CreditCard),
            "debit card" => Ok(PaymentKind::DebitCard),
            "gcash" => Ok(PaymentKind::Gcash),
            _ => Err(PosError::UnknownPaymentMethod {
                label: label.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
