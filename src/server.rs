//! HTTP server lifecycle
//!
//! Builds one actix `App` per worker over a shared [`AppState`] and runs it
//! until the process is signalled to stop.

use crate::http::{self, AppState, Trace};
use actix_web::{web, App, HttpServer};
use tracing::{info, warn};

/// Configuration for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Number of worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with custom values
    pub fn new(host: String, port: u16, workers: usize) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            warn!(
                workers,
                default = default.workers,
                "invalid worker count, using default"
            );
            default.workers
        } else {
            workers
        };

        Self {
            host,
            port,
            workers,
        }
    }
}

/// Bind and run the server until shutdown
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound.
pub async fn run(config: ServerConfig, state: AppState) -> std::io::Result<()> {
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Trace)
            .configure(http::configure)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?;

    info!(
        host = %config.host,
        port = config.port,
        workers = config.workers,
        "wallet ledger listening"
    );
    server.run().await
}
