#![recursion_limit = "256"]

mod backend;
mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use crate::backend::rest::RestBackend;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal in deployed environments.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;

    let backend = RestBackend::new(&config.backend).map_err(|e| e.to_string())?;
    tracing::info!(url = backend.base_url(), "backend client initialized");
    let state = state::AppState::new(Arc::new(backend));

    let app = routes::app(state, config.site_root.as_deref())?;
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("failed to bind port {port}: {e}"))?;

    tracing::info!(%port, "bar one listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
