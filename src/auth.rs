//! Credential checks and stateless session tokens.
//!
//! Tokens are HMAC-signed JWTs carrying `{email, role, exp}`. Nothing is kept
//! server side: every request re-verifies the signature and expiry.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dto::{Role, User};
use crate::error::{Error, Result, TokenError};
use crate::stores::MemoryStore;

pub const DEFAULT_TOKEN_VALIDITY_HOURS: i64 = 24;
/// Upper bound accepted from configuration: ten years.
pub const MAX_TOKEN_VALIDITY_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    pub role: Role,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
}

pub struct AuthEngine {
    store: Arc<MemoryStore>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl AuthEngine {
    pub fn new(store: Arc<MemoryStore>, secret: &[u8]) -> Self {
        Self {
            store,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validity: Duration::hours(DEFAULT_TOKEN_VALIDITY_HOURS),
        }
    }

    /// Overrides how long issued tokens stay valid. A negative window issues
    /// tokens that are already expired.
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    /// Looks the user up by email and compares the password as plaintext.
    /// Unknown email and wrong password fail the same way.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        match self.store.get_user_by_email(email) {
            Some(user) if user.password == password => Ok(user),
            _ => Err(Error::InvalidCredentials),
        }
    }

    pub fn generate_token(&self, user: &User) -> Result<String> {
        let exp = Utc::now()
            .checked_add_signed(self.validity)
            .ok_or_else(|| Error::Internal("token expiry out of range".into()))?;
        let claims = Claims {
            email: user.email.clone(),
            role: user.role,
            exp: exp.timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::Internal(format!("failed to sign token: {e}")))
    }

    pub fn parse_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::BadSignature,
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        TokenError::UnsupportedAlgorithm
                    }
                    _ => TokenError::Malformed,
                };
                debug!(error = %e, ?reason, "rejected session token");
                Error::InvalidToken(reason)
            })
    }
}
