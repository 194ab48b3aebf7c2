//! REST surface of the wallet
//!
//! ```text
//! GET    /api/user                 PUT /api/user
//! GET    /api/cards                POST /api/cards
//! GET    /api/cards/{id}           DELETE /api/cards/{id}
//! GET    /api/transactions         POST /api/transactions
//! GET    /api/transactions/{id}
//! POST   /api/transfers
//! POST   /api/nfc-payment          POST /api/qr-payment
//! GET    /api/contacts             POST /api/contacts
//! GET    /api/contacts/{id}        DELETE /api/contacts/{id}
//! ```
//!
//! Bodies are camelCase JSON. Failures are `{"error": "<message>"}` with the
//! status given by [`error`].

use actix_web::web;

pub mod cards;
pub mod contacts;
pub mod error;
pub mod payments;
pub mod state;
pub mod trace;
pub mod transactions;
pub mod user;

pub use error::ApiResult;
pub use state::AppState;
pub use trace::{Trace, TraceId};

use crate::types::{AmountInput, WalletError};

/// JSON extractor configuration rejecting malformed bodies with a 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Register every `/api` route
///
/// # Examples
///
/// ```no_run
/// use actix_web::{web, App};
/// use wallet_ledger::http::{self, AppState, Trace};
///
/// # fn build(state: AppState) {
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .wrap(Trace)
///     .configure(http::configure);
/// # }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(user::get_user)
            .service(user::update_user)
            .service(cards::list_cards)
            .service(cards::get_card)
            .service(cards::create_card)
            .service(cards::delete_card)
            .service(transactions::list_transactions)
            .service(transactions::get_transaction)
            .service(transactions::create_transaction)
            .service(payments::transfer)
            .service(payments::nfc_payment)
            .service(payments::qr_payment)
            .service(contacts::list_contacts)
            .service(contacts::get_contact)
            .service(contacts::create_contact)
            .service(contacts::delete_contact),
    );
}

/// A required, non-empty text field
fn required_text(value: Option<String>, field: &str, message: &str) -> Result<String, WalletError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| WalletError::invalid_input(field, message))
}

/// A required, non-blank amount, returned as raw text for the ledger
fn required_amount(
    value: Option<AmountInput>,
    field: &str,
    message: &str,
) -> Result<String, WalletError> {
    value
        .filter(|amount| !amount.is_blank())
        .map(AmountInput::into_text)
        .ok_or_else(|| WalletError::invalid_input(field, message))
}
