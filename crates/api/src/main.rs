use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelforge_api::config::ServerConfig;
use reelforge_api::router::build_app_router;
use reelforge_api::state::AppState;
use reelforge_core::config::AppConfig;
use reelforge_events::CallbackRelay;
use reelforge_pipeline::JobInvoker;
use reelforge_providers::ProviderSet;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelforge_api=debug,reelforge_pipeline=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let app_config = AppConfig::from_env().expect("Invalid provider configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        downstream = %app_config.relay.downstream_base_url,
        relay_attempts = app_config.relay.max_attempts,
        "Loaded configuration",
    );

    // --- Providers and job invoker ---
    let providers = ProviderSet::from_config(&app_config);
    let invoker = Arc::new(JobInvoker::new(providers, &app_config));

    // --- Callback relay ---
    let relay = Arc::new(
        CallbackRelay::new(&app_config.relay).expect("Failed to build callback relay HTTP client"),
    );
    tracing::info!(endpoint = relay.endpoint(), "Callback relay ready");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        invoker,
        relay,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
