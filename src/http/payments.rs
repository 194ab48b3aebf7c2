//! Transfer and card-payment handlers
//!
//! ```text
//! POST /api/transfers   {"contactId":"contact-1","amount":"50.00"}
//! POST /api/nfc-payment {"cardId":"card-3","merchantName":"Coffee Shop","amount":"10.00"}
//! POST /api/qr-payment  {"cardId":"card-3","merchantName":"Coffee Shop","amount":"10.00"}
//! ```

use super::{required_amount, required_text, ApiResult, AppState};
use crate::core::{CardPayment, PaymentChannel};
use crate::types::{AmountInput, WalletError};
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

const TRANSFER_FIELDS_REQUIRED: &str = "Contact ID and amount are required";
const PAYMENT_FIELDS_REQUIRED: &str = "Card ID, merchant name, and amount are required";

/// Request body for `POST /api/transfers`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub contact_id: Option<String>,
    pub amount: Option<AmountInput>,
}

/// Request body for the card-payment routes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentRequest {
    pub card_id: Option<String>,
    pub merchant_name: Option<String>,
    pub amount: Option<AmountInput>,
}

/// An amount for the money-out routes, where a numeric zero counts as absent
fn payment_amount(value: Option<AmountInput>, message: &str) -> Result<String, WalletError> {
    required_amount(
        value.filter(|amount| !amount.is_zero_number()),
        "amount",
        message,
    )
}

/// Send money to a contact
#[post("/transfers")]
pub async fn transfer(
    state: web::Data<AppState>,
    body: web::Json<TransferRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let contact_id = required_text(body.contact_id, "contactId", TRANSFER_FIELDS_REQUIRED)?;
    let amount = payment_amount(body.amount, TRANSFER_FIELDS_REQUIRED)?;

    let transaction = state.ledger.transfer(&state.user_id, &contact_id, &amount)?;
    Ok(HttpResponse::Created().json(transaction))
}

async fn pay(
    state: web::Data<AppState>,
    body: CardPaymentRequest,
    channel: PaymentChannel,
) -> ApiResult<HttpResponse> {
    let payment = CardPayment {
        user_id: state.user_id.clone(),
        card_id: required_text(body.card_id, "cardId", PAYMENT_FIELDS_REQUIRED)?,
        merchant_name: required_text(body.merchant_name, "merchantName", PAYMENT_FIELDS_REQUIRED)?,
        amount: payment_amount(body.amount, PAYMENT_FIELDS_REQUIRED)?,
        channel,
    };

    let transaction = state.ledger.pay(payment)?;
    Ok(HttpResponse::Created().json(transaction))
}

/// Simulated contactless card payment
#[post("/nfc-payment")]
pub async fn nfc_payment(
    state: web::Data<AppState>,
    body: web::Json<CardPaymentRequest>,
) -> ApiResult<HttpResponse> {
    pay(state, body.into_inner(), PaymentChannel::Nfc).await
}

/// Simulated QR-code card payment
#[post("/qr-payment")]
pub async fn qr_payment(
    state: web::Data<AppState>,
    body: web::Json<CardPaymentRequest>,
) -> ApiResult<HttpResponse> {
    pay(state, body.into_inner(), PaymentChannel::Qr).await
}
