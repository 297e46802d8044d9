//! HTTP API for the rescue simulation.
//!
//! One [`Simulation`] is shared by every request. Handlers take the lock for
//! the whole operation, so ticks, resets, and commands never interleave.

/// Environment-driven server settings.
pub mod config;
/// API error type and its JSON rendering.
pub mod error;
/// Route handlers.
pub mod rest;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use sar_simulation::Simulation;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::ServerConfig;
pub use error::ApiError;

/// State shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    /// The single simulation of this process.
    pub sim: Mutex<Simulation>,
}

impl AppState {
    /// Wrap a simulation for sharing across handlers.
    pub fn new(sim: Simulation) -> Arc<Self> {
        Arc::new(Self {
            sim: Mutex::new(sim),
        })
    }
}

/// Build the API router around the given state.
pub fn build_router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(rest::index))
        .route("/health", get(|| async { "ok" }))
        .route("/api/state", get(rest::api_state))
        .route("/api/stats", get(rest::api_stats))
        .route("/api/reset", post(rest::api_reset))
        .route("/api/command", post(rest::api_command))
        .route("/api/spawn_persons", post(rest::api_spawn_persons))
        .with_state(state)
        .layer(cors)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

/// Install the global `tracing` subscriber, honouring `RUST_LOG`.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sar=info".parse()?))
        .init();
    Ok(())
}

/// Create the shared simulation and serve the API until the process exits.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let sim_config = config.sim_config();
    info!(seed = sim_config.seed, "starting simulation");
    let sim = Simulation::new(sim_config)?;
    let app = build_router(AppState::new(sim), &config.allowed_origins);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Rescue simulation API listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
