//! Core business logic module
//!
//! This module contains the wallet's storage and ledger components:
//! - `traits` - Record abstractions shared by every stored entity
//! - `record_store` - Thread-safe keyed storage for one record kind
//! - `wallet` - The store instance bundling all record kinds
//! - `transaction_number` - Display reference numbers for transactions
//! - `ledger` - Transaction recording and balance mutation
//! - `payments` - Transfer and card-payment adapters over the ledger
//! - `seed` - Demo data loaded at startup

pub mod ledger;
pub mod payments;
pub mod record_store;
pub mod seed;
pub mod traits;
pub mod transaction_number;
pub mod wallet;

pub use ledger::Ledger;
pub use payments::{CardPayment, PaymentChannel};
pub use record_store::RecordStore;
pub use seed::{seed_default_user, seed_demo_data, DEFAULT_USER_ID};
pub use traits::{ListOrder, NewRecord, Record};
pub use transaction_number::TransactionNumbers;
pub use wallet::WalletStore;
