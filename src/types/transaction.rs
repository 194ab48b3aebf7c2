//! Transaction-related types for the wallet ledger
//!
//! This module defines the stored transaction record, its direction and the
//! draft the ledger validates before anything is persisted.

use super::money::Money;
use crate::core::traits::{ListOrder, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a transaction
///
/// The stored amount is always a non-negative magnitude; the kind alone
/// decides whether balances go down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money leaves the wallet
    ///
    /// Decreases the user's balance and, if referenced, the card's balance.
    Debit,

    /// Money enters the wallet
    ///
    /// Increases the user's balance and, if referenced, the card's balance.
    Credit,
}

impl TransactionKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
        }
    }

    /// Apply `amount` to `balance` in this direction
    ///
    /// # Returns
    ///
    /// The new balance rounded to two places, or `None` on decimal overflow
    pub fn apply(&self, balance: Money, amount: Money) -> Option<Money> {
        match self {
            TransactionKind::Debit => balance.checked_sub(amount),
            TransactionKind::Credit => balance.checked_add(amount),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a transaction type string is neither debit nor credit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("type must be 'debit' or 'credit', got '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debit" => Ok(TransactionKind::Debit),
            "credit" => Ok(TransactionKind::Credit),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// A persisted ledger entry
///
/// Immutable once created: there is no update or delete operation, which is
/// what keeps cached balances consistent with the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    /// `None` for transfers and top-ups
    pub card_id: Option<String>,
    pub merchant_name: String,
    /// Non-negative magnitude
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: Option<String>,
    /// Display reference, distinct from `id`
    pub transaction_no: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Transaction {
    const KIND: &'static str = "Transaction";
    const ORDER: ListOrder = ListOrder::NewestFirst;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Unvalidated transaction request handed to the ledger
///
/// `amount` and `kind` stay as the client sent them; the ledger parses and
/// rejects them before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub user_id: String,
    pub card_id: Option<String>,
    pub merchant_name: String,
    pub amount: String,
    pub kind: String,
    pub description: Option<String>,
}

impl TransactionDraft {
    /// A debit draft, the shape both payment adapters produce
    pub fn debit(
        user_id: impl Into<String>,
        card_id: Option<String>,
        merchant_name: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        TransactionDraft {
            user_id: user_id.into(),
            card_id,
            merchant_name: merchant_name.into(),
            amount: amount.into(),
            kind: TransactionKind::Debit.as_str().to_string(),
            description: Some(description.into()),
        }
    }
}
