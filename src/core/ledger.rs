//! Transaction ledger and balance mutation
//!
//! This module provides the `Ledger`, the only component allowed to create
//! transactions and the only one that moves balances.
//!
//! # Protocol
//!
//! Recording a transaction:
//! 1. Validates the amount (non-negative decimal within bounds) and the type
//!    (`debit` or `credit`); on failure nothing is written
//! 2. Issues a transaction number
//! 3. Persists the transaction, stamped with the time of persistence
//! 4. Applies the signed amount to the owning user's balance and, if the
//!    referenced card resolves, to the card's balance
//! 5. Returns the persisted transaction
//!
//! Balances are a cache mutated in place, never recomputed from history. A
//! card id that does not resolve is skipped with a warning: only the user's balance
//! changes.
//!
//! # Atomicity
//!
//! The ledger locks the user's entry, then the card's, and holds both while
//! it computes the new balances, inserts the transaction and writes the
//! balances back. Every new balance is computed before the first write, so
//! either all three writes happen or none do, and concurrent transactions for
//! the same user are serialized instead of losing updates.

use crate::core::record_store::next_id;
use crate::core::traits::Record;
use crate::core::transaction_number::TransactionNumbers;
use crate::core::wallet::WalletStore;
use crate::types::{
    Money, ParseKindError, Transaction, TransactionDraft, TransactionKind, User, WalletError,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Records transactions and applies their balance effects
///
/// Cheap to share: wrap in an `Arc` and hand it to every worker.
#[derive(Debug)]
pub struct Ledger {
    /// Shared record stores
    store: Arc<WalletStore>,

    /// Transaction number generator
    numbers: TransactionNumbers,
}

impl Ledger {
    /// Create a ledger over an existing store
    ///
    /// Transaction numbers already present in the store are reserved so the
    /// generator never hands them out again.
    pub fn new(store: Arc<WalletStore>) -> Self {
        let numbers = TransactionNumbers::new();
        for transaction in store.transactions.values() {
            numbers.reserve(&transaction.transaction_no);
        }
        Ledger { store, numbers }
    }

    /// The underlying record stores
    pub fn store(&self) -> &WalletStore {
        &self.store
    }

    /// Reserve a transaction number assigned outside the ledger (seed data)
    pub fn reserve_number(&self, number: &str) -> bool {
        self.numbers.reserve(number)
    }

    /// Record a transaction and apply it to the cached balances
    ///
    /// # Arguments
    ///
    /// * `draft` - The unvalidated transaction fields
    ///
    /// # Returns
    ///
    /// The persisted transaction. Callers re-read the user or card to observe
    /// the new balances.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - The amount or type is invalid; nothing is written
    /// * `ArithmeticOverflow` - A new balance is out of range; nothing is written
    /// * `StoreFault` - The generated id collided; nothing is written
    pub fn record(&self, draft: TransactionDraft) -> Result<Transaction, WalletError> {
        let amount = Money::parse_amount(&draft.amount)
            .map_err(|e| WalletError::invalid_input("amount", e.to_string()))?;
        let kind: TransactionKind = draft
            .kind
            .parse()
            .map_err(|e: ParseKindError| WalletError::invalid_input("type", e.to_string()))?;

        let card_id = draft.card_id.filter(|id| !id.is_empty());
        let description = draft.description.filter(|text| !text.is_empty());
        let user_id = draft.user_id;
        let merchant_name = draft.merchant_name;

        let transaction = self.store.users.with_entry(Some(user_id.as_str()), |user| {
            self.store.cards.with_entry(card_id.as_deref(), |card| {
                let new_user_balance = match user.as_deref() {
                    Some(user) => Some(
                        kind.apply(user.balance, amount)
                            .ok_or_else(|| WalletError::arithmetic_overflow(kind.as_str(), &user.id))?,
                    ),
                    None => None,
                };
                let new_card_balance = match card.as_deref() {
                    Some(card) => Some(
                        kind.apply(card.balance, amount)
                            .ok_or_else(|| WalletError::arithmetic_overflow(kind.as_str(), &card.id))?,
                    ),
                    None => None,
                };

                let transaction = self.store.transactions.insert(Transaction {
                    id: next_id(),
                    user_id: user_id.clone(),
                    card_id: card_id.clone(),
                    merchant_name,
                    amount,
                    kind,
                    description,
                    transaction_no: self.numbers.next(),
                    created_at: Utc::now(),
                })?;

                match (user, new_user_balance) {
                    (Some(user), Some(balance)) => {
                        debug!(user_id = %user.id, old = %user.balance, new = %balance, "user balance updated");
                        user.balance = balance;
                    }
                    _ => warn!(user_id = %user_id, "user not found; user balance left unchanged"),
                }
                match (card, new_card_balance) {
                    (Some(card), Some(balance)) => {
                        debug!(card_id = %card.id, old = %card.balance, new = %balance, "card balance updated");
                        card.balance = balance;
                    }
                    _ => {
                        if let Some(card_id) = card_id.as_deref() {
                            warn!(card_id, "card not found; card balance left unchanged");
                        }
                    }
                }

                Ok::<_, WalletError>(transaction)
            })
        })?;

        info!(
            transaction_id = %transaction.id,
            transaction_no = %transaction.transaction_no,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "transaction recorded"
        );
        Ok(transaction)
    }

    /// Current balance of a user
    pub fn user_balance(&self, user_id: &str) -> Result<Money, WalletError> {
        self.store
            .users
            .get(user_id)
            .map(|user| user.balance)
            .ok_or_else(|| WalletError::not_found(User::KIND, user_id))
    }
}
