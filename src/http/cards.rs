//! Card handlers
//!
//! ```text
//! GET    /api/cards
//! GET    /api/cards/{id}
//! POST   /api/cards {"holderName":"Abdullah Ghatasheh","cardNumber":"4242"}
//! DELETE /api/cards/{id}
//! ```

use super::{required_text, ApiResult, AppState};
use crate::types::{Card, Money, NewCard};
use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;

/// Request body for `POST /api/cards`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub holder_name: Option<String>,
    pub card_number: Option<String>,
    pub balance: Option<Money>,
    pub gradient: Option<String>,
}

/// Cards of the implicit user, newest first
#[get("/cards")]
pub async fn list_cards(state: web::Data<AppState>) -> ApiResult<web::Json<Vec<Card>>> {
    Ok(web::Json(state.store().cards.list_for_user(&state.user_id)))
}

#[get("/cards/{id}")]
pub async fn get_card(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Card>> {
    Ok(web::Json(state.store().card(&path)?))
}

/// Create a card owned by the implicit user
#[post("/cards")]
pub async fn create_card(
    state: web::Data<AppState>,
    body: web::Json<CreateCardRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let card = state.store().create_card(NewCard {
        user_id: state.user_id.clone(),
        holder_name: required_text(body.holder_name, "holderName", "Holder name is required")?,
        card_number: required_text(body.card_number, "cardNumber", "Card number is required")?,
        balance: body.balance,
        gradient: body.gradient,
    })?;

    info!(card_id = %card.id, "card created");
    Ok(HttpResponse::Created().json(card))
}

/// Delete a card; its transactions are kept
#[delete("/cards/{id}")]
pub async fn delete_card(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.store().delete_card(&path)?;
    info!(card_id = %path.as_str(), "card deleted");
    Ok(HttpResponse::NoContent().finish())
}
