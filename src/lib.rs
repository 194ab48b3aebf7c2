//! Wallet Ledger Library
//! # Overview
//!
//! This library provides the in-memory store, transaction ledger and REST
//! surface of a single-user digital wallet.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, Card, Transaction, Contact, Money)
//! - [`cli`] - CLI and environment configuration
//! - [`core`] - Business logic components:
//!   - [`core::record_store`] - Thread-safe keyed storage per record kind
//!   - [`core::wallet`] - The store instance shared by all handlers
//!   - [`core::ledger`] - Transaction recording and balance mutation
//!   - [`core::payments`] - Transfers and card payments over the ledger
//! - [`http`] - actix-web handlers, error mapping and request tracing
//! - [`server`] - HTTP server lifecycle
//!
//! # Transaction Types
//!
//! - **Debit**: Subtract the amount from the user's balance and, if the
//!   referenced card exists, from the card's balance
//! - **Credit**: Add the amount to the same balances
//!
//! # Balances
//!
//! Balances are cached on the user and card records and updated in place by
//! every transaction. Nothing recomputes them from history, and there is no
//! sufficiency check: balances may go negative.

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod server;
pub mod types;

pub use crate::core::{Ledger, WalletStore};
pub use types::{Card, Contact, Money, Transaction, TransactionKind, User, WalletError};
