use axum::{
    routing::{get, post, put},
    Router,
};

use super::controllers::{health, list_payments, login, review_payment};
use super::AppState;

pub const API_PREFIX: &str = "/dashboard/v1";

pub fn create_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/payments", get(list_payments))
        .route("/payments/{id}/review", put(review_payment));

    Router::new()
        .route("/api", get(health))
        .nest(API_PREFIX, api)
        .with_state(state)
}
