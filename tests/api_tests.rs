//! End-to-end API tests
//!
//! These tests drive the complete HTTP surface (routing, JSON extraction,
//! ledger, store and error mapping) against a freshly seeded store. Each
//! test builds its own app so state never leaks between tests.
//!
//! Seed data:
//! - user-1 with balance 14235.34
//! - card-1 (1234.00), card-2 (890.00), card-3 (2354.00)
//! - contact-1 Ali Ahmed, contact-2 Steve Gates, contact-3 Elon Jobs
//! - tx-1 .. tx-5

#[cfg(test)]
mod tests {
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use wallet_ledger::core::{seed_demo_data, Ledger, WalletStore, DEFAULT_USER_ID};
    use wallet_ledger::http::{self, AppState, Trace};

    fn seeded_state() -> AppState {
        let ledger = Ledger::new(Arc::new(WalletStore::new()));
        seed_demo_data(&ledger).unwrap();
        AppState::new(Arc::new(ledger), DEFAULT_USER_ID)
    }

    async fn app(
        state: AppState,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(Trace)
                .configure(http::configure),
        )
        .await
    }

    async fn get_json<S>(app: &S, uri: &str) -> Value
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_and_read_body_json(app, req).await
    }

    async fn post<S>(app: &S, uri: &str, payload: Value) -> (StatusCode, Value)
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let res = test::call_service(app, req).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn test_nfc_payment_moves_user_and_card_balances() {
        let app = app(seeded_state()).await;

        let (status, tx) = post(
            &app,
            "/api/nfc-payment",
            json!({ "cardId": "card-3", "merchantName": "Coffee Shop", "amount": "10.00" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(tx["type"], "debit");
        assert_eq!(tx["amount"], "10.00");
        assert_eq!(tx["cardId"], "card-3");
        assert_eq!(get_json(&app, "/api/user").await["balance"], "14225.34");
        assert_eq!(get_json(&app, "/api/cards/card-3").await["balance"], "2344.00");
        assert_eq!(get_json(&app, "/api/cards/card-2").await["balance"], "890.00");
    }

    #[actix_web::test]
    async fn test_transfer_to_seeded_contact() {
        let app = app(seeded_state()).await;

        let (status, tx) = post(
            &app,
            "/api/transfers",
            json!({ "contactId": "contact-1", "amount": 50 }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(tx["merchantName"], "Transfer to Ali Ahmed");
        assert_eq!(tx["description"], "Money transfer to +1-300-555-0161");
        assert_eq!(tx["type"], "debit");
        assert!(tx["cardId"].is_null());
        assert_eq!(get_json(&app, "/api/user").await["balance"], "14185.34");
    }

    #[actix_web::test]
    async fn test_transfer_to_unknown_contact_changes_nothing() {
        let app = app(seeded_state()).await;

        let (status, body) = post(
            &app,
            "/api/transfers",
            json!({ "contactId": "contact-404", "amount": "50.00" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Contact not found" }));
        assert_eq!(get_json(&app, "/api/user").await["balance"], "14235.34");
        let history = get_json(&app, "/api/transactions").await;
        assert_eq!(history.as_array().map(Vec::len), Some(5));
    }

    #[actix_web::test]
    async fn test_new_transaction_heads_the_history() {
        let app = app(seeded_state()).await;

        let (_, tx) = post(
            &app,
            "/api/qr-payment",
            json!({ "cardId": "card-1", "merchantName": "Bakery", "amount": "4.5" }),
        )
        .await;

        let history = get_json(&app, "/api/transactions").await;
        let ids: Vec<&str> = history
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|tx| tx["id"].as_str())
            .collect();
        assert_eq!(ids, vec![tx["id"].as_str().unwrap(), "tx-1", "tx-2", "tx-4", "tx-5", "tx-3"]);
        assert_eq!(tx["description"], "QR Payment");
        assert_ne!(tx["transactionNo"], tx["id"]);
    }

    #[actix_web::test]
    async fn test_payment_with_unknown_card_debits_user_only() {
        let app = app(seeded_state()).await;

        let (status, _) = post(
            &app,
            "/api/nfc-payment",
            json!({ "cardId": "card-404", "merchantName": "Coffee Shop", "amount": "10.00" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(get_json(&app, "/api/user").await["balance"], "14225.34");
        let cards = get_json(&app, "/api/cards").await;
        let balances: Vec<&str> = cards
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|card| card["balance"].as_str())
            .collect();
        assert_eq!(balances, vec!["1234.00", "890.00", "2354.00"]);
    }

    #[actix_web::test]
    async fn test_delete_card_twice() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::delete().uri("/api/cards/card-1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/cards/card-1").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        // history referencing other cards is untouched
        let history = get_json(&app, "/api/transactions").await;
        assert_eq!(history.as_array().map(Vec::len), Some(5));
    }

    #[rstest]
    #[case::malformed_json("/api/transactions", "{not json")]
    #[case::wrong_type("/api/transfers", r#"{"contactId": 7, "amount": "1"}"#)]
    #[case::amount_array("/api/nfc-payment", r#"{"cardId":"card-3","merchantName":"M","amount":[1]}"#)]
    #[actix_web::test]
    async fn test_malformed_bodies_are_bad_requests(#[case] uri: &str, #[case] raw: &str) {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/json"))
            .set_payload(raw.to_string())
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert!(body["error"].is_string());
    }

    #[rstest]
    #[case::card("/api/cards/nope", "Card not found")]
    #[case::transaction("/api/transactions/nope", "Transaction not found")]
    #[case::contact("/api/contacts/nope", "Contact not found")]
    #[actix_web::test]
    async fn test_unknown_ids_are_not_found(#[case] uri: &str, #[case] message: &str) {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], message);
    }

    #[actix_web::test]
    async fn test_amount_above_bound_is_rejected() {
        let app = app(seeded_state()).await;

        let (status, _) = post(
            &app,
            "/api/transactions",
            json!({ "merchantName": "Lottery", "amount": "100000000.00", "type": "credit" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(get_json(&app, "/api/user").await["balance"], "14235.34");
    }

    #[actix_web::test]
    async fn test_every_response_carries_a_trace_id() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::get().uri("/api/cards/nope").to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.headers().contains_key("trace-id"));
    }

    #[actix_web::test]
    async fn test_concurrent_payments_lose_no_update() {
        let state = seeded_state();
        let ledger = Arc::clone(&state.ledger);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        ledger.transfer(DEFAULT_USER_ID, "contact-2", "1.00").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let app = app(state).await;
        assert_eq!(get_json(&app, "/api/user").await["balance"], "14035.34");
    }
}
