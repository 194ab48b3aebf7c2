//! Demo data loaded at startup
//!
//! The wallet serves a single implicit user. `seed_default_user` creates just
//! that user; `seed_demo_data` adds the demo's three cards, three contacts and
//! five historical transactions on top.
//!
//! Seed transactions are inserted directly: their effect is already part of
//! the seeded balances, so they must not go through the ledger again.

use crate::core::ledger::Ledger;
use crate::core::wallet::WalletStore;
use crate::types::{Card, Contact, Money, Transaction, TransactionKind, User, WalletError};
use chrono::{DateTime, Duration, Utc};
use tracing::info;

/// Id of the implicit user every request acts as
pub const DEFAULT_USER_ID: &str = "user-1";

const HOLDER_NAME: &str = "Abdullah Ghatasheh";

fn default_user() -> User {
    User {
        id: DEFAULT_USER_ID.to_string(),
        name: HOLDER_NAME.to_string(),
        email: "abdgfx@gmail.com".to_string(),
        mobile: "+962 79 890 50 14".to_string(),
        balance: Money::from_cents(1_423_534),
    }
}

/// Create the implicit user if it does not exist yet
pub fn seed_default_user(store: &WalletStore) -> Result<User, WalletError> {
    match store.users.get(DEFAULT_USER_ID) {
        Some(user) => Ok(user),
        None => store.users.insert(default_user()),
    }
}

fn card(id: &str, number: &str, cents: i64, gradient: &str, now: DateTime<Utc>) -> Card {
    Card {
        id: id.to_string(),
        user_id: DEFAULT_USER_ID.to_string(),
        holder_name: HOLDER_NAME.to_string(),
        card_number: number.to_string(),
        balance: Money::from_cents(cents),
        gradient: gradient.to_string(),
        created_at: now,
    }
}

fn contact(id: &str, name: &str, phone: &str, avatar_color: &str) -> Contact {
    Contact {
        id: id.to_string(),
        user_id: DEFAULT_USER_ID.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        avatar_color: avatar_color.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    card_id: Option<&str>,
    merchant_name: &str,
    cents: i64,
    kind: TransactionKind,
    description: &str,
    transaction_no: &str,
    created_at: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        user_id: DEFAULT_USER_ID.to_string(),
        card_id: card_id.map(str::to_string),
        merchant_name: merchant_name.to_string(),
        amount: Money::from_cents(cents),
        kind,
        description: Some(description.to_string()),
        transaction_no: transaction_no.to_string(),
        created_at,
    }
}

/// Load the full demo data set
///
/// Seed transaction numbers are reserved with the ledger so freshly issued
/// numbers never repeat them.
///
/// # Errors
///
/// Returns `StoreFault` if any seed id is already taken.
pub fn seed_demo_data(ledger: &Ledger) -> Result<(), WalletError> {
    let store = ledger.store();
    let now = Utc::now();
    let yesterday = now - Duration::days(1);
    let last_week = now - Duration::days(7);

    store.users.insert(default_user())?;

    for seeded in [
        card("card-1", "2312", 123_400, "from-purple-200 via-purple-300 to-purple-400", now),
        card("card-2", "5432", 89_000, "from-purple-500 via-purple-600 to-purple-700", now),
        card("card-3", "3245", 235_400, "from-purple-900 via-purple-700 to-purple-600", now),
    ] {
        store.cards.insert(seeded)?;
    }

    for seeded in [
        contact("contact-1", "Ali Ahmed", "+1-300-555-0161", "bg-orange-500"),
        contact("contact-2", "Steve Gates", "+1-300-555-0119", "bg-pink-500"),
        contact("contact-3", "Elon Jobs", "+1-202-555-0171", "bg-orange-600"),
    ] {
        store.contacts.insert(seeded)?;
    }

    use TransactionKind::{Credit, Debit};
    for seeded in [
        transaction("tx-1", Some("card-3"), "Walmart", 3_523, Debit, "Retailer corporation", "23010412432431", now),
        transaction("tx-2", None, "Top up", 43_000, Credit, "Account top up", "23010412432432", yesterday),
        transaction("tx-3", Some("card-3"), "Netflix", 1_300, Debit, "Subscription", "23010412432433", last_week),
        transaction("tx-4", Some("card-2"), "Amazon", 1_223, Debit, "Online purchase", "23010412432434", yesterday),
        transaction("tx-5", Some("card-2"), "Nike", 5_023, Debit, "Sporting goods", "23010412432435", yesterday),
    ] {
        ledger.reserve_number(&seeded.transaction_no);
        store.transactions.insert(seeded)?;
    }

    info!(
        cards = store.cards.len(),
        contacts = store.contacts.len(),
        transactions = store.transactions.len(),
        "demo data seeded"
    );
    Ok(())
}
