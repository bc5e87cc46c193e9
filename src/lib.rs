//! Podfacts Service Library
//!
//! An HTTP service exposing host identity, environment variables, system
//! resource usage, current time and a proxied joke API, for container and
//! Kubernetes smoke-testing. Four stateless fact providers sit behind a
//! route table of thin dispatching handlers.

pub mod config;
pub mod environment;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod joke;
pub mod models;
pub mod resources;
pub mod web;

pub use config::Config;
pub use environment::EnvironmentSnapshot;
pub use joke::JokeClient;
pub use models::{HostIdentity, NetworkDetails, ResourceSample};

use axum::{response::Json, routing::get, Router};
use std::sync::Arc;
use tracing::debug;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Read-only environment access; handlers never touch `std::env`
    pub env: EnvironmentSnapshot,
    /// Upstream joke client, built once with the configured timeout
    pub jokes: JokeClient,
}

/// Health check endpoint handler
pub async fn health_check() -> Json<serde_json::Value> {
    debug!("Health check endpoint accessed");

    // Exact body shape; liveness probes match on it.
    Json(serde_json::json!({ "status": "UP" }))
}

/// Build the route table: each path maps to exactly one handler, and each
/// handler performs one provider call plus serialization. Constructed once
/// at startup.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::hello_world))
        .route("/health", get(health_check))
        .route("/time", get(handlers::current_time))
        .route("/env", get(handlers::env_dump))
        .route("/system-info", get(handlers::system_info))
        .route("/network", get(handlers::network_details))
        .route("/random-joke", get(handlers::random_joke))
        .route("/details", get(web::details))
        .fallback(web::not_found)
        .with_state(state)
}
