//! Transaction handlers
//!
//! ```text
//! GET  /api/transactions
//! GET  /api/transactions/{id}
//! POST /api/transactions {"merchantName":"Walmart","amount":"35.23","type":"debit"}
//! ```

use super::{required_amount, required_text, ApiResult, AppState};
use crate::types::{AmountInput, Transaction, TransactionDraft};
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

/// Request body for `POST /api/transactions`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub card_id: Option<String>,
    pub merchant_name: Option<String>,
    pub amount: Option<AmountInput>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

/// Transaction history of the implicit user, newest first
#[get("/transactions")]
pub async fn list_transactions(
    state: web::Data<AppState>,
) -> ApiResult<web::Json<Vec<Transaction>>> {
    Ok(web::Json(
        state.store().transactions.list_for_user(&state.user_id),
    ))
}

#[get("/transactions/{id}")]
pub async fn get_transaction(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Transaction>> {
    Ok(web::Json(state.store().transaction(&path)?))
}

/// Record an arbitrary debit or credit
#[post("/transactions")]
pub async fn create_transaction(
    state: web::Data<AppState>,
    body: web::Json<CreateTransactionRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let draft = TransactionDraft {
        user_id: state.user_id.clone(),
        card_id: body.card_id,
        merchant_name: required_text(
            body.merchant_name,
            "merchantName",
            "Merchant name is required",
        )?,
        amount: required_amount(body.amount, "amount", "Amount is required")?,
        kind: required_text(body.kind, "type", "Type is required")?,
        description: body.description,
    };

    let transaction = state.ledger.record(draft)?;
    Ok(HttpResponse::Created().json(transaction))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{app, seeded_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_list_newest_first() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::get().uri("/api/transactions").to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<&str> = body.iter().filter_map(|tx| tx["id"].as_str()).collect();
        assert_eq!(ids, vec!["tx-1", "tx-2", "tx-4", "tx-5", "tx-3"]);
    }

    #[actix_web::test]
    async fn test_credit_with_numeric_amount() {
        let state = seeded_state();
        let app = app(state.clone()).await;

        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(json!({
                "cardId": "card-1",
                "merchantName": "Top up",
                "amount": 100,
                "type": "credit"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["amount"], "100.00");
        assert_eq!(body["type"], "credit");
        assert!(body["description"].is_null());
        assert_eq!(
            state.store().card("card-1").unwrap().balance.to_string(),
            "1334.00"
        );
        assert_eq!(
            state.store().user("user-1").unwrap().balance.to_string(),
            "14335.34"
        );
    }

    #[rstest]
    #[case::unknown_type(json!({ "merchantName": "M", "amount": "1", "type": "refund" }))]
    #[case::negative(json!({ "merchantName": "M", "amount": "-1", "type": "debit" }))]
    #[case::missing_merchant(json!({ "amount": "1", "type": "debit" }))]
    #[case::missing_amount(json!({ "merchantName": "M", "type": "debit" }))]
    #[case::amount_object(json!({ "merchantName": "M", "amount": {}, "type": "debit" }))]
    #[actix_web::test]
    async fn test_create_rejects_invalid_input(#[case] payload: Value) {
        let state = seeded_state();
        let app = app(state.clone()).await;

        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .set_json(payload)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.store().transactions.len(), 5);
    }

    #[actix_web::test]
    async fn test_get_transaction() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::get().uri("/api/transactions/tx-2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["merchantName"], "Top up");
        assert!(body["cardId"].is_null());

        let req = test::TestRequest::get().uri("/api/transactions/tx-9").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
