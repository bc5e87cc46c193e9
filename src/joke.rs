use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::models::JokeResult;

/// What went wrong with one upstream fetch. Only ever observed as the text
/// inside [`JokeResult::Err`]; nothing here crosses the fetcher boundary as
/// a Rust error.
#[derive(Error, Debug)]
enum FetchError {
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("response body is not valid JSON: {0}")]
    Body(String),
}

/// Client for the upstream joke API: a single GET per request with a fixed
/// timeout and no retries.
#[derive(Clone)]
pub struct JokeClient {
    client: Client,
    url: String,
    timeout_seconds: u64,
}

impl JokeClient {
    /// Build the client once at startup with the configured timeout baked
    /// in. The timeout covers the whole exchange, body included, so a hung
    /// upstream cannot stall a request beyond the bound.
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            client,
            url: config.joke_url.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Fetch one joke. Timeouts, connection failures, bad statuses and
    /// unparseable bodies all fold into [`JokeResult::Err`] with the failure
    /// text preserved; the caller always receives a well-formed result.
    pub async fn fetch(&self) -> JokeResult {
        let correlation_id = Uuid::new_v4();
        debug!("[{}] GET {}", correlation_id, self.url);

        match self.try_fetch().await {
            Ok(payload) => {
                info!("[{}] Upstream joke fetch succeeded", correlation_id);
                JokeResult::Ok(payload)
            }
            Err(err) => {
                warn!("[{}] Upstream joke fetch failed: {}", correlation_id, err);
                JokeResult::Err(err.to_string())
            }
        }
    }

    async fn try_fetch(&self) -> Result<serde_json::Value, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout(self.timeout_seconds)
            } else {
                FetchError::Connect(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json().await.map_err(|err| {
            // The total timeout can also expire mid-body.
            if err.is_timeout() {
                FetchError::Timeout(self.timeout_seconds)
            } else {
                FetchError::Body(err.to_string())
            }
        })
    }
}
