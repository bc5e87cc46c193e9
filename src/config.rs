use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whether `/env` may dump the full process environment. The dump is the
    /// point of a smoke-test pod, so it defaults on, but operators running
    /// with secret-bearing environments should turn it off.
    pub expose_environment: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    pub joke_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                expose_environment: true,
            },
            upstream: UpstreamConfig {
                joke_url: "https://official-joke-api.appspot.com/jokes/random".to_string(),
                timeout_seconds: 5,
            },
        }
    }
}

impl Config {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Configuration file {:?} does not exist, creating default config",
                path
            );
            let default_config = Self::default();
            default_config
                .save(path)
                .await
                .context("Failed to save default configuration")?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read configuration file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {:?}", path))?;

        config.validate().context("Configuration validation failed")?;

        Ok(config)
    }

    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write configuration file: {:?}", path))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        // Validate server configuration
        if self.server.host.is_empty() {
            anyhow::bail!("Server host cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.server.expose_environment {
            tracing::warn!(
                "/env will dump the full process environment - set server.expose_environment = false if this pod carries secrets"
            );
        }

        // Validate upstream configuration
        if self.upstream.joke_url.is_empty() {
            anyhow::bail!("Upstream joke URL cannot be empty");
        }

        if !self.upstream.joke_url.starts_with("http://")
            && !self.upstream.joke_url.starts_with("https://")
        {
            anyhow::bail!(
                "Upstream joke URL must be an http(s) URL: {}",
                self.upstream.joke_url
            );
        }

        if self.upstream.timeout_seconds == 0 {
            anyhow::bail!("Upstream timeout must be greater than 0");
        }

        Ok(())
    }
}
