use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use payment_desk::{server, Config};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("payment-desk v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = server::run(config).await {
        error!("{err}");
        process::exit(1);
    }
}
