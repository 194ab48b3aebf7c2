//! HTTP mapping for wallet errors
//!
//! Keeps `WalletError` free of HTTP concerns while letting handlers return it
//! directly. Every failure is rendered as `{"error": "<message>"}`.

use crate::types::WalletError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{error, warn};

/// Result alias for HTTP handlers
pub type ApiResult<T> = Result<T, WalletError>;

/// Message returned in place of any 500-class error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error body
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn status_for(error: &WalletError) -> StatusCode {
    match error {
        WalletError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        WalletError::NotFound { .. } => StatusCode::NOT_FOUND,
        WalletError::ArithmeticOverflow { .. } | WalletError::StoreFault { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ResponseError for WalletError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_internal() {
            error!(error = %self, "request failed with an internal error");
            return HttpResponse::build(self.status_code()).json(ErrorBody {
                error: INTERNAL_ERROR_MESSAGE,
            });
        }

        let message = self.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &message })
    }
}

/// Turn a JSON extraction failure into a 400 `InvalidInput` response
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected request body");
    WalletError::invalid_input("body", format!("Invalid request body: {err}")).into()
}
