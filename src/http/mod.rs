//! HTTP boundary: routes, the bearer-token extractor and the mapping from
//! [`Error`] to status codes and `{"error": ...}` bodies.

mod auth;
mod controllers;
mod routes;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::auth::AuthEngine;
use crate::engine::PaymentEngine;
use crate::error::Error;

pub use auth::Authenticated;
pub use controllers::{LoginRequest, LoginResponse};
pub use routes::create_routes;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthEngine>,
    pub payments: Arc<PaymentEngine>,
}

impl AppState {
    pub fn new(auth: AuthEngine, payments: PaymentEngine) -> Self {
        Self {
            auth: Arc::new(auth),
            payments: Arc::new(payments),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credential".into()),
            Error::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            Error::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token".into()),
            // Wrong role is reported as 401, not 403.
            Error::Forbidden => (StatusCode::UNAUTHORIZED, "Forbidden".into()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "Payment not found".into()),
            Error::Internal(_) | Error::Csv(_) | Error::Io(_) => {
                error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
