use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Local;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::models::{NetworkDetails, ResourceSample};
use crate::{identity, resources, AppState};

/// Current local wall-clock time at second precision.
pub async fn current_time() -> Json<serde_json::Value> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    debug!("Reporting local time: {}", now);

    Json(json!({ "time": now }))
}

/// Full dump of the process environment, as a flat name-to-value map.
///
/// Serves the snapshot only when `server.expose_environment` allows it;
/// otherwise answers 403 so a locked-down deployment keeps the route for
/// compatibility without leaking anything.
pub async fn env_dump(State(state): State<AppState>) -> Response {
    if !state.config.server.expose_environment {
        warn!("Environment dump requested but server.expose_environment is disabled");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "environment dump is disabled by configuration" })),
        )
            .into_response();
    }

    let snapshot = state.env.snapshot();
    info!("Serving environment dump with {} variables", snapshot.len());

    Json(snapshot).into_response()
}

/// CPU, memory and disk utilization percentages.
///
/// Suspends for the one-second CPU averaging window, making this the slowest
/// endpoint in the service. A missing OS metrics facility surfaces as 500.
pub async fn system_info() -> Result<Json<ResourceSample>, ProviderError> {
    let sample = resources::sample().await?;

    info!(
        "System info sampled: cpu={:.1}% memory={:.1}% disk={:.1}%",
        sample.cpu_percent, sample.memory_percent, sample.disk_percent
    );

    Ok(Json(sample))
}

/// Host identity merged with the orchestration context from `POD_IP` and
/// `NODE_NAME`. Identity resolution degrades rather than fails, so this
/// always answers 200.
pub async fn network_details(State(state): State<AppState>) -> Json<NetworkDetails> {
    let identity = identity::resolve().await;
    let details = NetworkDetails::compose(
        identity,
        state.env.get("POD_IP"),
        state.env.get("NODE_NAME"),
    );

    info!(
        "Network details: hostname={} host_ip={} pod_ip={} node_name={}",
        details.hostname, details.host_ip, details.pod_ip, details.node_name
    );

    Json(details)
}

/// One upstream joke fetch per request, no retries. Upstream failures are
/// folded into an `{"error": ...}` body with status 200, so consumers never
/// special-case transport problems.
pub async fn random_joke(State(state): State<AppState>) -> Json<serde_json::Value> {
    let result = state.jokes.fetch().await;

    if !result.is_ok() {
        debug!("Joke fetch degraded to an error payload");
    }

    Json(result.into_body())
}
