//! The wallet's record stores
//!
//! `WalletStore` bundles one [`RecordStore`] per entity type. The process
//! entry point constructs exactly one, wraps it in an `Arc` and hands it to
//! the ledger; there is no global instance.
//!
//! Profile edits and card/contact creation go straight through here. Balance
//! changes do not: they belong to the ledger.

use crate::core::record_store::RecordStore;
use crate::core::traits::Record;
use crate::types::{
    Card, Contact, NewCard, NewContact, Transaction, User, UserPatch, WalletError,
};
use std::sync::Mutex;

/// In-memory storage for every record kind
#[derive(Debug, Default)]
pub struct WalletStore {
    pub users: RecordStore<User>,
    pub cards: RecordStore<Card>,
    pub transactions: RecordStore<Transaction>,
    pub contacts: RecordStore<Contact>,
    /// Serializes profile edits so an email check and its write cannot interleave
    profile_lock: Mutex<()>,
}

impl WalletStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a partial profile edit to a user
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the user does not exist
    /// * `InvalidInput` - If the new email already belongs to another user
    /// * `StoreFault` - If an earlier profile edit panicked
    pub fn update_user(&self, user_id: &str, patch: UserPatch) -> Result<User, WalletError> {
        let _guard = self
            .profile_lock
            .lock()
            .map_err(|_| WalletError::store_fault("profile lock poisoned"))?;

        if let Some(email) = patch.email.as_deref() {
            let taken = self
                .users
                .find(|user| user.email == email && user.id != user_id)
                .is_some();
            if taken {
                return Err(WalletError::invalid_input(
                    "email",
                    "Email is already in use",
                ));
            }
        }

        self.users
            .update(user_id, |user| patch.apply(user))
            .ok_or_else(|| WalletError::not_found(User::KIND, user_id))
    }

    /// Fetch a user or report it missing
    pub fn user(&self, user_id: &str) -> Result<User, WalletError> {
        self.users
            .get(user_id)
            .ok_or_else(|| WalletError::not_found(User::KIND, user_id))
    }

    /// Fetch a card or report it missing
    pub fn card(&self, card_id: &str) -> Result<Card, WalletError> {
        self.cards
            .get(card_id)
            .ok_or_else(|| WalletError::not_found(Card::KIND, card_id))
    }

    /// Fetch a transaction or report it missing
    pub fn transaction(&self, transaction_id: &str) -> Result<Transaction, WalletError> {
        self.transactions
            .get(transaction_id)
            .ok_or_else(|| WalletError::not_found(Transaction::KIND, transaction_id))
    }

    /// Fetch a contact or report it missing
    pub fn contact(&self, contact_id: &str) -> Result<Contact, WalletError> {
        self.contacts
            .get(contact_id)
            .ok_or_else(|| WalletError::not_found(Contact::KIND, contact_id))
    }

    /// Create a card with a fresh id
    pub fn create_card(&self, card: NewCard) -> Result<Card, WalletError> {
        self.cards.create(card)
    }

    /// Create a contact with a fresh id
    pub fn create_contact(&self, contact: NewContact) -> Result<Contact, WalletError> {
        self.contacts.create(contact)
    }

    /// Delete a card; deleting twice reports `NotFound` the second time
    ///
    /// Transactions referencing the card are kept.
    pub fn delete_card(&self, card_id: &str) -> Result<(), WalletError> {
        if self.cards.delete(card_id) {
            Ok(())
        } else {
            Err(WalletError::not_found(Card::KIND, card_id))
        }
    }

    /// Delete a contact; transactions labelled with it are kept
    pub fn delete_contact(&self, contact_id: &str) -> Result<(), WalletError> {
        if self.contacts.delete(contact_id) {
            Ok(())
        } else {
            Err(WalletError::not_found(Contact::KIND, contact_id))
        }
    }
}
