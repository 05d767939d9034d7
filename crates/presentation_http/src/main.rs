//! SMHI Weather Gateway HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{StationService, ports::ObservationPort};
use infrastructure::{AppConfig, ServerConfig, SmhiObservationAdapter, init_tracing};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first so the log format can be chosen from it
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_tracing(config.server.log_format)?;

    info!(
        "🌦️ SMHI Weather Gateway v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        host = %config.server.host,
        port = %config.server.port,
        smhi = %config.smhi.base_url,
        api_keys = config.security.api_keys.len(),
        "Configuration loaded"
    );

    if !config.security.has_api_keys() {
        warn!("No API keys configured, every protected request will be rejected");
    }

    // Initialize SMHI adapter
    let adapter = SmhiObservationAdapter::with_config(config.smhi.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize SMHI client: {e}"))?;
    let observations: Arc<dyn ObservationPort> = Arc::new(adapter);

    let state = AppState::new(StationService::new(observations));

    // Build router with auth, tracing and request IDs; CORS sits outside so
    // preflight requests never hit the key check
    let app = routes::create_app(state, &config.security).layer(cors_layer(&config.server));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// CORS for the read-only API
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    use axum::http::{HeaderValue, Method};

    if server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    }
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and bound the drain time
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);

    // axum drains open connections; force the exit if that takes too long
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("Shutdown timeout of {:?} elapsed, forcing exit", timeout);
        std::process::exit(1);
    });
}
