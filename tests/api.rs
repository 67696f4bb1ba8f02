use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use payment_desk::http::{create_routes, AppState};
use payment_desk::{AuthEngine, MemoryStore, PaymentEngine};

const SECRET: &[u8] = b"donttellanyone";
const CS_EMAIL: &str = "john-cs@durianpay.id";
const OPS_EMAIL: &str = "jane-operational@durianpay.id";
const PASSWORD: &str = "admin123";

fn app() -> (Router, Arc<MemoryStore>) {
    app_with_validity(Duration::hours(24))
}

fn app_with_validity(validity: Duration) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::seeded());
    let auth = AuthEngine::new(Arc::clone(&store), SECRET).with_validity(validity);
    let state = AppState::new(auth, PaymentEngine::new(Arc::clone(&store)));
    (create_routes(state), store)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn login_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/dashboard/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn login(app: &Router, email: &str) -> String {
    let body = json!({ "email": email, "password": PASSWORD }).to_string();
    let (status, body) = send(app, login_request(&body)).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_login_success() {
    let (app, _) = app();
    let body = json!({ "email": CS_EMAIL, "password": PASSWORD }).to_string();

    let (status, body) = send(&app, login_request(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "cs");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (app, _) = app();
    let body = json!({ "email": CS_EMAIL, "password": "wrongpassword" }).to_string();

    let (status, body) = send(&app, login_request(&body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid credential" }));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (app, _) = app();
    let body = json!({ "email": "nobody@example.com", "password": PASSWORD }).to_string();

    let (status, _) = send(&app, login_request(&body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validation_errors() {
    let (app, _) = app();
    let bodies = [
        "not json".to_string(),
        json!({ "email": CS_EMAIL }).to_string(),
        json!({ "email": "not-an-email", "password": PASSWORD }).to_string(),
        json!({ "email": CS_EMAIL, "password": "" }).to_string(),
    ];

    for body in bodies {
        let (status, response) = send(&app, login_request(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert!(response["error"].is_string());
    }
}

#[tokio::test]
async fn test_payments_without_token() {
    let (app, _) = app();
    let request = Request::builder()
        .uri("/dashboard/v1/payments")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing authorization header");
}

#[tokio::test]
async fn test_payments_with_bad_header_or_token() {
    let (app, _) = app();

    let request = Request::builder()
        .uri("/dashboard/v1/payments")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid authorization header");

    let (status, body) = send(&app, authed(Method::GET, "/dashboard/v1/payments", "a.b.c")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_payments_with_expired_token() {
    let (expired_app, _) = app_with_validity(Duration::hours(-1));
    let token = login(&expired_app, CS_EMAIL).await;

    let (status, body) =
        send(&expired_app, authed(Method::GET, "/dashboard/v1/payments", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_payments_default_listing() {
    let (app, _) = app();
    let token = login(&app, CS_EMAIL).await;

    let (status, body) = send(&app, authed(Method::GET, "/dashboard/v1/payments", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let meta = &body["meta"];
    assert_eq!(meta["total"], 20);
    assert_eq!(meta["page"], 1);
    assert_eq!(meta["size"], 10);
    assert_eq!(meta["total_pages"], 2);
    assert_eq!(meta["data"].as_array().unwrap().len(), 10);

    assert_eq!(
        body["summary"],
        json!({ "total": 20, "completed": 7, "processing": 7, "failed": 6 })
    );

    let dates: Vec<&str> = meta["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["date"].as_str().unwrap())
        .collect();
    let first = chrono::DateTime::parse_from_rfc3339(dates[0]).unwrap();
    let last = chrono::DateTime::parse_from_rfc3339(dates[dates.len() - 1]).unwrap();
    assert!(first > last);
}

#[tokio::test]
async fn test_payments_filter_keeps_global_summary() {
    let (app, _) = app();
    let token = login(&app, CS_EMAIL).await;

    let (status, body) = send(
        &app,
        authed(Method::GET, "/dashboard/v1/payments?status=failed", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 6);
    assert!(body["meta"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["status"] == "failed"));
    assert_eq!(
        body["summary"],
        json!({ "total": 6, "completed": 7, "processing": 7, "failed": 6 })
    );
}

#[tokio::test]
async fn test_payments_search_by_id() {
    let (app, store) = app();
    let token = login(&app, CS_EMAIL).await;
    let id = store.payment_list()[0].id.clone();

    let uri = format!("/dashboard/v1/payments?search={id}");
    let (status, body) = send(&app, authed(Method::GET, &uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["meta"]["data"][0]["id"], id.as_str());
}

#[tokio::test]
async fn test_payments_sort_and_lenient_paging() {
    let (app, _) = app();
    let token = login(&app, CS_EMAIL).await;

    let uri = "/dashboard/v1/payments?page=abc&size=-5&sortBy=amount&orderBy=asc";
    let (status, body) = send(&app, authed(Method::GET, uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["size"], 10);

    let amounts: Vec<f64> = body["meta"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["amount"].as_f64().unwrap())
        .collect();
    assert_eq!(amounts[0], 10000.0);
    assert!(amounts.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_payments_second_page() {
    let (app, _) = app();
    let token = login(&app, CS_EMAIL).await;

    let uri = "/dashboard/v1/payments?page=2&size=15";
    let (_, body) = send(&app, authed(Method::GET, uri, &token)).await;
    assert_eq!(body["meta"]["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["meta"]["total_pages"], 2);
}

#[tokio::test]
async fn test_review_forbidden_for_cs() {
    let (app, store) = app();
    let token = login(&app, CS_EMAIL).await;
    let id = store.payment_list()[0].id.clone();

    let uri = format!("/dashboard/v1/payments/{id}/review");
    let (status, body) = send(&app, authed(Method::PUT, &uri, &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Forbidden");
    assert!(!store.get_payment_by_id(&id).unwrap().reviewed);
}

#[tokio::test]
async fn test_review_by_operational() {
    let (app, store) = app();
    let token = login(&app, OPS_EMAIL).await;
    let id = store.payment_list()[0].id.clone();

    let uri = format!("/dashboard/v1/payments/{id}/review");
    let (status, _) = send(&app, authed(Method::PUT, &uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(store.get_payment_by_id(&id).unwrap().reviewed);

    let (status, _) = send(&app, authed(Method::PUT, &uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_review_unknown_payment() {
    let (app, _) = app();
    let token = login(&app, OPS_EMAIL).await;

    let uri = "/dashboard/v1/payments/does-not-exist/review";
    let (status, body) = send(&app, authed(Method::PUT, uri, &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Payment not found");
}

#[tokio::test]
async fn test_review_blank_id() {
    let (app, _) = app();
    let token = login(&app, OPS_EMAIL).await;

    let uri = "/dashboard/v1/payments/%20/review";
    let (status, body) = send(&app, authed(Method::PUT, uri, &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "id must not empty");
}

#[tokio::test]
async fn test_review_undecodable_id_is_json_error() {
    let (app, _) = app();
    let token = login(&app, OPS_EMAIL).await;

    let uri = "/dashboard/v1/payments/%FF/review";
    let (status, body) = send(&app, authed(Method::PUT, uri, &token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("UTF-8"));
}

#[tokio::test]
async fn test_review_without_token() {
    let (app, store) = app();
    let id = store.payment_list()[0].id.clone();

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/dashboard/v1/payments/{id}/review"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let (app, _) = app();
    let request = Request::builder().uri("/api").body(Body::empty()).unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}
