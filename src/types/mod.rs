//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `money`: fixed-point currency values
//! - `user`, `card`, `contact`: the wallet's owned records
//! - `transaction`: ledger entries, their direction and unvalidated drafts
//! - `error`: Error types for the wallet ledger

pub mod card;
pub mod contact;
pub mod error;
pub mod money;
pub mod transaction;
pub mod user;

pub use card::{Card, NewCard};
pub use contact::{Contact, NewContact};
pub use error::WalletError;
pub use money::{AmountInput, Money, MoneyError};
pub use transaction::{ParseKindError, Transaction, TransactionDraft, TransactionKind};
pub use user::{NewUser, User, UserPatch};
