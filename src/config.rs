//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

/// Secret used when `JWT_SECRET` is not provided. Only suitable for local runs.
pub const DEFAULT_JWT_SECRET: &str = "changeme";

/// Customer-support payment dashboard backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "payment-desk")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Listening port.
    #[arg(long, short, default_value_t = 8080, env = "PORT")]
    pub port: u16,

    /// HMAC secret for signing session tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Session token validity in hours.
    #[arg(
        long,
        default_value_t = crate::auth::DEFAULT_TOKEN_VALIDITY_HOURS,
        env = "TOKEN_TTL_HOURS",
        value_parser = clap::value_parser!(i64).range(1..=crate::auth::MAX_TOKEN_VALIDITY_HOURS)
    )]
    pub token_ttl_hours: i64,

    /// CSV file of payments to load instead of the generated demo ledger.
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Log level, overridden by `RUST_LOG`.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// The configured signing secret, or [`DEFAULT_JWT_SECRET`] with a warning.
    pub fn jwt_secret(&self) -> &str {
        match self.jwt_secret.as_deref() {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set, using default");
                DEFAULT_JWT_SECRET
            }
        }
    }
}
