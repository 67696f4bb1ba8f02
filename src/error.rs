//! Domain-specific errors for the payment dashboard.
//!
//! Covers the failure cases a request can end in:
//! - Credential and session failures (bad login, bad or expired token, wrong role)
//! - Lookup failures (unknown payment)
//! - Malformed input
//!
//! Seed loading and startup failures (CSV, I/O) share the same type so the
//! binary can propagate them with `?`. The mapping to HTTP status codes
//! lives in [`crate::http`].

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reasons a session token is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is expired")]
    Expired,
    #[error("bad signature")]
    BadSignature,
    #[error("malformed token")]
    Malformed,
    #[error("unexpected signing method")]
    UnsupportedAlgorithm,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    /// Authorization header missing or not of the `Bearer <token>` shape.
    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("invalid token: {0}")]
    InvalidToken(#[from] TokenError),

    #[error("forbidden")]
    Forbidden,

    #[error("data not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
