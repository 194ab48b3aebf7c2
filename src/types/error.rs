//! Error types for the wallet ledger
//!
//! This module defines every error a store, ledger or adapter operation can
//! report. The HTTP surface maps each variant onto a status code; nothing in
//! the core knows about HTTP.
//!
//! # Error Categories
//!
//! - **Validation**: malformed or missing request fields (400)
//! - **Lookup**: an id that does not resolve (404)
//! - **Arithmetic**: a balance update outside the decimal range (500)
//! - **Store faults**: unexpected internal failures (500)

use thiserror::Error;

/// Main error type for the wallet ledger
///
/// Every operation either fully applies its effect or returns one of these
/// without having written anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// A request field is missing or malformed
    ///
    /// Raised before any record is touched.
    #[error("{message}")]
    InvalidInput {
        /// Name of the offending field as the client spells it
        field: String,
        /// Human-readable description returned to the client
        message: String,
    },

    /// An id does not resolve to a stored record
    #[error("{entity} not found")]
    NotFound {
        /// Record kind, e.g. `Card`
        entity: &'static str,
        /// The id that was looked up
        id: String,
    },

    /// A balance update would leave the decimal range
    ///
    /// The ledger computes every new balance before writing, so the store is
    /// unchanged when this is returned.
    #[error("Arithmetic overflow in {operation} for {record}")]
    ArithmeticOverflow {
        /// Operation that would overflow (`debit` or `credit`)
        operation: String,
        /// Id of the record whose balance overflowed
        record: String,
    },

    /// An unexpected internal failure
    #[error("Store fault: {message}")]
    StoreFault {
        /// Description of the failure, logged but never returned to clients
        message: String,
    },
}

// Helper functions for creating common errors

impl WalletError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        WalletError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        WalletError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, record: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
            record: record.to_string(),
        }
    }

    /// Create a StoreFault error
    pub fn store_fault(message: impl Into<String>) -> Self {
        WalletError::StoreFault {
            message: message.into(),
        }
    }

    /// Whether the failure is internal rather than caused by the request
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            WalletError::ArithmeticOverflow { .. } | WalletError::StoreFault { .. }
        )
    }
}
