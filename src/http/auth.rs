use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::Claims;
use crate::error::Error;

use super::AppState;

const INVALID_HEADER: Error = Error::Unauthenticated("invalid authorization header");

/// Claims of a request carrying a valid `Authorization: Bearer <token>` header.
pub struct Authenticated(pub Claims);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .map(|v| v.to_str().map_err(|_| INVALID_HEADER))
            .transpose()?
            .filter(|v| !v.is_empty())
            .ok_or(Error::Unauthenticated("missing authorization header"))?;

        let token = bearer_token(value).ok_or(INVALID_HEADER)?;
        state.auth.parse_token(token).map(Authenticated)
    }
}

/// Scheme match is case-insensitive; the token is everything after the first space.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}
