//! Contact handlers
//!
//! ```text
//! GET    /api/contacts
//! GET    /api/contacts/{id}
//! POST   /api/contacts {"name":"Ali Ahmed","phone":"+1-300-555-0161"}
//! DELETE /api/contacts/{id}
//! ```

use super::{required_text, ApiResult, AppState};
use crate::types::{Contact, NewContact};
use actix_web::{delete, get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;

/// Request body for `POST /api/contacts`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar_color: Option<String>,
}

/// Contacts of the implicit user in insertion order
#[get("/contacts")]
pub async fn list_contacts(state: web::Data<AppState>) -> ApiResult<web::Json<Vec<Contact>>> {
    Ok(web::Json(
        state.store().contacts.list_for_user(&state.user_id),
    ))
}

#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Contact>> {
    Ok(web::Json(state.store().contact(&path)?))
}

#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<AppState>,
    body: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let body = body.into_inner();
    let contact = state.store().create_contact(NewContact {
        user_id: state.user_id.clone(),
        name: required_text(body.name, "name", "Name is required")?,
        phone: required_text(body.phone, "phone", "Phone is required")?,
        avatar_color: body.avatar_color,
    })?;

    info!(contact_id = %contact.id, "contact created");
    Ok(HttpResponse::Created().json(contact))
}

#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.store().delete_contact(&path)?;
    info!(contact_id = %path.as_str(), "contact deleted");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{app, seeded_state};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_created_contact_lists_last() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({ "name": "Zed", "phone": "+1-555" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert_eq!(created["avatarColor"], "bg-purple-500");

        let req = test::TestRequest::get().uri("/api/contacts").to_request();
        let contacts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = contacts.iter().filter_map(|c| c["name"].as_str()).collect();

        assert_eq!(names, vec!["Ali Ahmed", "Steve Gates", "Elon Jobs", "Zed"]);
    }

    #[actix_web::test]
    async fn test_create_contact_requires_phone() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({ "name": "Zed" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_contact_twice() {
        let app = app(seeded_state()).await;

        let req = test::TestRequest::delete().uri("/api/contacts/contact-3").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/contacts/contact-3").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Contact not found");
    }
}
