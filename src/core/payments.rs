//! Transfer and card-payment adapters
//!
//! Both adapters turn a user-facing action into a single debit draft and hand
//! it to [`Ledger::record`]. They never touch balances themselves.

use crate::core::ledger::Ledger;
use crate::core::traits::Record;
use crate::types::{Contact, Transaction, TransactionDraft, WalletError};
use tracing::info;

/// How a card payment was initiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChannel {
    /// Simulated contactless tap
    Nfc,
    /// Simulated QR code scan
    Qr,
}

impl PaymentChannel {
    /// Description stored on the resulting transaction
    pub fn description(&self) -> &'static str {
        match self {
            PaymentChannel::Nfc => "NFC Payment",
            PaymentChannel::Qr => "QR Payment",
        }
    }
}

/// A card payment request
#[derive(Debug, Clone, PartialEq)]
pub struct CardPayment {
    pub user_id: String,
    pub card_id: String,
    pub merchant_name: String,
    /// Raw amount text, validated by the ledger
    pub amount: String,
    pub channel: PaymentChannel,
}

impl Ledger {
    /// Send money to a contact
    ///
    /// Records a card-less debit against `user_id`. Only that user's own
    /// contacts can be paid; a contact owned by anyone else is reported as
    /// missing. There is no sufficiency check, so the balance may go negative.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user sending the money
    /// * `contact_id` - The recipient contact
    /// * `amount` - Raw amount text
    ///
    /// # Errors
    ///
    /// * `NotFound` - If the user has no such contact; nothing is written
    /// * Any error from [`Ledger::record`]
    pub fn transfer(
        &self,
        user_id: &str,
        contact_id: &str,
        amount: &str,
    ) -> Result<Transaction, WalletError> {
        let contact = self
            .store()
            .contact(contact_id)
            .ok()
            .filter(|contact| contact.user_id == user_id)
            .ok_or_else(|| WalletError::not_found(Contact::KIND, contact_id))?;

        info!(user_id, contact_id, "transfer requested");
        self.record(TransactionDraft::debit(
            user_id,
            None,
            format!("Transfer to {}", contact.name),
            amount,
            format!("Money transfer to {}", contact.phone),
        ))
    }

    /// Pay a merchant with a card
    ///
    /// The card id is not checked here; the ledger skips a card that does not
    /// resolve and debits only the user.
    pub fn pay(&self, payment: CardPayment) -> Result<Transaction, WalletError> {
        info!(
            card_id = %payment.card_id,
            channel = payment.channel.description(),
            "card payment requested"
        );
        self.record(TransactionDraft::debit(
            payment.user_id,
            Some(payment.card_id),
            payment.merchant_name,
            payment.amount,
            payment.channel.description(),
        ))
    }
}
