use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures a fact provider surfaces to the dispatcher.
///
/// Locally-recovered conditions never appear here: identity resolution
/// substitutes a degraded value and the joke fetcher folds every upstream
/// failure into its result type. Only a missing OS metrics facility
/// escalates to an error response.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The OS metrics facility could not produce a usable sample
    #[error("system metrics unavailable: {0}")]
    SamplingUnavailable(String),
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProviderError::SamplingUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("Provider failure: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
