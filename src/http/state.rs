//! Shared HTTP state
//!
//! Handlers receive this through `web::Data`. It carries the ledger (and,
//! through it, the store) plus the id of the implicit user every request acts
//! as.

use crate::core::{Ledger, WalletStore};
use std::sync::Arc;

/// Dependency bundle for HTTP handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
    /// Owner of every record created through the API
    pub user_id: String,
}

impl AppState {
    pub fn new(ledger: Arc<Ledger>, user_id: impl Into<String>) -> Self {
        AppState {
            ledger,
            user_id: user_id.into(),
        }
    }

    pub fn store(&self) -> &WalletStore {
        self.ledger.store()
    }
}
