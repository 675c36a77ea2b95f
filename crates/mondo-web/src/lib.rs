//! Server-rendered MondoExplora site.
//!
//! # Pages
//! - `/{lang}`: region tabs and the top countries of the active region
//! - `/{lang}/country/{slug}`: every destination of a country
//! - `/{lang}/destination/{slug}`: hotel count and "from" price
//!
//! # Data
//! Pages read the precomputed `homepage-data.json` (see `mondo generate`) on
//! every request, so regenerating the file takes effect immediately. A
//! missing or broken file renders empty pages and logs an error.
//!
//! # Setup
//! ```sh
//! mondo generate
//! RUST_LOG=info MONDO_PORT=3000 cargo run -p mondo-web
//! ```
//!
//! Client-side search uses the `mondo-wasm` bundle when it is served under
//! `/pkg` and falls back to `/api/search` otherwise:
//! ```sh
//! wasm-pack build crates/mondo-wasm --target web
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

use config::Config;
use routes::{
    country_handler, destination_handler, health_handler, homepage_handler, root_handler,
    search_data_handler, search_handler,
};
use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/search", get(search_handler))
        .route("/api/search-data", get(search_data_handler))
        .nest_service("/pkg", ServeDir::new(&state.config.pkg_dir))
        .route("/{lang}", get(homepage_handler))
        .route("/{lang}/country/{slug}", get(country_handler))
        .route("/{lang}/destination/{slug}", get(destination_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Loading configuration...");
    let config = Config::load()?;
    let address = format!("0.0.0.0:{}", config.port);
    info!("Serving data from {}", config.data_file.display());

    let app = build_router(AppState::new(config));

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
