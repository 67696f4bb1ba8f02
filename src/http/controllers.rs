use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dto::{ListRequest, ListResult, Role, SortKey, SortOrder, StatusSummary};
use crate::error::{Error, Result};

use super::{AppState, Authenticated};

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(Error::Validation("email is required".into()));
        }
        if !looks_like_email(&self.email) {
            return Err(Error::Validation("email is not a valid address".into()));
        }
        if self.password.is_empty() {
            return Err(Error::Validation("password is required".into()));
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    page: Option<String>,
    size: Option<String>,
    status: Option<String>,
    search: Option<String>,
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
    #[serde(rename = "orderBy")]
    order_by: Option<String>,
}

impl ListQuery {
    fn into_request(self) -> ListRequest {
        ListRequest {
            page: query_int(self.page.as_deref(), 1),
            size: query_int(self.size.as_deref(), 10),
            status: self.status.unwrap_or_default(),
            search: self.search.unwrap_or_default(),
            sort_by: SortKey::parse(self.sort_by.as_deref().unwrap_or("date")),
            order_by: SortOrder::parse(self.order_by.as_deref().unwrap_or("desc")),
        }
    }
}

/// Absent, non-numeric and non-positive values all fall back to `default`.
fn query_int(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[derive(Serialize, Debug)]
pub struct SummaryBody {
    pub total: usize,
    #[serde(flatten)]
    pub counts: StatusSummary,
}

#[derive(Serialize, Debug)]
pub struct ListResponse {
    pub meta: ListResult,
    pub summary: SummaryBody,
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = payload.map_err(|rejection| Error::Validation(rejection.body_text()))?;
    request.validate()?;

    let user = state
        .auth
        .authenticate(&request.email, &request.password)
        .inspect_err(|_| warn!(email = %request.email, "login rejected"))?;
    let token = state.auth.generate_token(&user)?;

    info!(email = %user.email, role = user.role.as_str(), "login succeeded");
    Ok(Json(LoginResponse {
        token,
        role: user.role,
    }))
}

pub async fn list_payments(
    Authenticated(_claims): Authenticated,
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>> {
    let Query(query) = query.map_err(|rejection| Error::Validation(rejection.body_text()))?;
    let request = query.into_request();

    let total = state.payments.get_total_by_filter(&request);
    let meta = state.payments.get_list(&request);
    let counts = state.payments.get_status_summary();

    Ok(Json(ListResponse {
        meta,
        summary: SummaryBody { total, counts },
    }))
}

pub async fn review_payment(
    Authenticated(claims): Authenticated,
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode> {
    if claims.role != Role::Operational {
        warn!(email = %claims.email, role = claims.role.as_str(), "review refused for role");
        return Err(Error::Forbidden);
    }
    let Path(id) = id.map_err(|rejection| Error::Validation(rejection.body_text()))?;
    if id.trim().is_empty() {
        return Err(Error::Validation("id must not empty".into()));
    }

    state.payments.review(&id)?;
    Ok(StatusCode::OK)
}
