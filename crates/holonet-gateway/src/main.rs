//! Holonet server
//!
//! - `GET /api` runs one fetch sequence against SWAPI in the background
//! - `GET /stats` reports counters as JSON
//! - `PORT` selects the listen port (default 3000)

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use holonet_core::error::{HolonetError, Result};
use holonet_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = config::Cli::parse();

    // Config errors are reported before logging exists, so print them directly.
    let cfg = match config::load(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("holonet: {e}");
            return std::process::ExitCode::from(2);
        }
    };

    let default_filter = if cfg.debug { "info,holonet_gateway=debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match serve(cfg).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "holonet stopped");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn serve(cfg: config::HolonetConfig) -> Result<()> {
    let listen = cfg.server.listen_addr();
    let port = cfg.server.port;
    let debug = cfg.debug;
    let timeout_ms = cfg.upstream.timeout_ms;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| HolonetError::Internal(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, "Server running at http://localhost:{port}/");
    tracing::info!("Open the URL in your browser and click the button to fetch Star Wars data");
    if debug {
        tracing::info!("Debug mode: ON");
        tracing::info!(timeout_ms, "Timeout: {timeout_ms} ms");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HolonetError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
