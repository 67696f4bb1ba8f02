use std::sync::Arc;

use chrono::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::auth::AuthEngine;
use crate::config::Config;
use crate::engine::PaymentEngine;
use crate::error::Result;
use crate::http::{create_routes, AppState};
use crate::stores::MemoryStore;

/// Builds the store described by `config`: demo users always, plus the CSV
/// ledger when `seed_file` is set and the generated demo ledger otherwise.
pub fn build_store(config: &Config) -> Result<MemoryStore> {
    match &config.seed_file {
        Some(path) => {
            let store = MemoryStore::with_default_users();
            let count = store.load_payments_csv(path)?;
            info!(count, path = %path.display(), "seeded payments from file");
            Ok(store)
        }
        None => Ok(MemoryStore::seeded()),
    }
}

pub fn build_state(config: &Config, store: Arc<MemoryStore>) -> AppState {
    let auth = AuthEngine::new(Arc::clone(&store), config.jwt_secret().as_bytes())
        .with_validity(Duration::hours(config.token_ttl_hours));
    AppState::new(auth, PaymentEngine::new(store))
}

/// Runs the dashboard API until ctrl-c.
///
/// # Errors
/// Returns an error if:
/// * The seed file cannot be read or has a malformed row
/// * The port cannot be bound
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(build_store(&config)?);
    let app = create_routes(build_state(&config, store));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(addr = %listener.local_addr()?, "payment desk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("payment desk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
    }
}
