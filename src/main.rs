//! Wallet Ledger Server
//!
//! REST backend for a single-user digital wallet: profile, payment cards,
//! contacts, transaction history, peer transfers and simulated card payments.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --port 8080 --workers 4
//! cargo run -- --no-seed --log-format json
//! RUST_LOG=wallet_ledger=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown
//! - 1: Startup error (address in use, seed failure, etc.)

use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use wallet_ledger::cli::{self, LogFormat};
use wallet_ledger::core::{seed_default_user, seed_demo_data, Ledger, WalletStore, DEFAULT_USER_ID};
use wallet_ledger::http::AppState;
use wallet_ledger::server;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = match format {
        LogFormat::Text => fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = cli::parse_args();
    init_tracing(args.log_format);
    let config = args.to_server_config();

    let ledger = Ledger::new(Arc::new(WalletStore::new()));
    let seeded = if args.no_seed {
        seed_default_user(ledger.store()).map(|_| ())
    } else {
        seed_demo_data(&ledger)
    };
    if let Err(e) = seeded {
        error!(error = %e, "failed to seed the store");
        return Err(std::io::Error::other(e.to_string()));
    }
    info!(demo_data = !args.no_seed, "store ready");

    let state = AppState::new(Arc::new(ledger), DEFAULT_USER_ID);
    server::run(config, state).await
}
