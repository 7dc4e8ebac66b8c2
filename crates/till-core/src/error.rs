//! # Checkout Error Types
//!
//! Typed error handling for the till-rs checkout core.
//! All fallible operations return `Result<T, PosError>`.

use thiserror::Error;

/// Core error type for cart and checkout operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PosError {
    /// Checkout attempted on an empty cart
    #[error("cart is empty - add products before checkout")]
    EmptyCart,

    /// Payment label did not match any known payment method
    #[error("unknown payment method: {label}")]
    UnknownPaymentMethod { label: String },

    /// Cart already holds the maximum number of distinct products
    #[error("cart is full: at most {max} distinct products")]
    CartCapacity { max: usize },

    /// Order ledger already holds the maximum number of orders
    #[error("order ledger is full: at most {max} orders")]
    LedgerCapacity { max: usize },

    /// The interactive collaborator abandoned the checkout
    #[error("checkout cancelled")]
    Cancelled,

    /// Order log sink could not be written
    #[error("order log write failed: {0}")]
    LogSink(String),
}

impl PosError {
    /// Returns true if the operation can simply be retried with new input
    /// (as opposed to a capacity bound that will keep rejecting).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PosError::UnknownPaymentMethod { .. } | PosError::EmptyCart
        )
    }
}

/// Result type alias for cart and checkout operations
pub type PosResult<T> = Result<T, PosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PosError::UnknownPaymentMethod {
                label: "bitcoin".into()
            }
            .to_string(),
            "unknown payment method: bitcoin"
        );
        assert_eq!(
            PosError::CartCapacity { max: 50 }.to_string(),
            "cart is full: at most 50 distinct products"
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(PosError::EmptyCart.is_retryable());
        assert!(PosError::UnknownPaymentMethod { label: "x".into() }.is_retryable());
        assert!(!PosError::CartCapacity { max: 50 }.is_retryable());
        assert!(!PosError::Cancelled.is_retryable());
    }
}
