//! Profile of the implicit user
//!
//! ```text
//! GET /api/user
//! PUT /api/user {"mobile":"+962 79 000 00 00"}
//! ```

use super::{ApiResult, AppState};
use crate::types::{User, UserPatch};
use actix_web::{get, put, web};

/// Fetch the implicit user
#[get("/user")]
pub async fn get_user(state: web::Data<AppState>) -> ApiResult<web::Json<User>> {
    let user = state.store().user(&state.user_id)?;
    Ok(web::Json(user))
}

/// Apply a partial profile edit to the implicit user
///
/// Absent fields are left untouched. Unknown fields (including `id`) are
/// ignored.
#[put("/user")]
pub async fn update_user(
    state: web::Data<AppState>,
    patch: web::Json<UserPatch>,
) -> ApiResult<web::Json<User>> {
    let user = state.store().update_user(&state.user_id, patch.into_inner())?;
    Ok(web::Json(user))
}
