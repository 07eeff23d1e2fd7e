//! Configuration loading for Elionyx.
//! Reads elionyx.toml from the current directory or path in ELIONYX_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

use elionyx_llm::ServingStack;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub vertex: VertexConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexConfig {
    pub project_id: String,
    #[serde(default = "default_region")]
    pub region: String,
    /// Chat may be served from a different region; falls back to `region`.
    pub chat_region: Option<String>,
    pub endpoint_id: String,
    /// Chat may be served from a different endpoint; falls back to `endpoint_id`.
    pub chat_endpoint_id: Option<String>,
    /// Path to a service-account key file. When absent, the
    /// GOOGLE_APPLICATION_CREDENTIALS_JSON / GOOGLE_APPLICATION_CREDENTIALS
    /// environment variables are consulted instead.
    pub credentials_file: Option<String>,
    #[serde(default)]
    pub serving_stack: ServingStack,
}

fn default_region() -> String { "us-central1".to_string() }

impl VertexConfig {
    pub fn chat_region(&self) -> &str {
        self.chat_region.as_deref().unwrap_or(&self.region)
    }

    pub fn chat_endpoint_id(&self) -> &str {
        self.chat_endpoint_id.as_deref().unwrap_or(&self.endpoint_id)
    }
}

impl Config {
    /// Load configuration from elionyx.toml.
    /// Checks ELIONYX_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("ELIONYX_CONFIG")
            .unwrap_or_else(|_| "elionyx.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy elionyx.example.toml to elionyx.toml and edit it.",
                path
            );
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [vertex]
            project_id = "demo-project"
            endpoint_id = "111"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.vertex.region, "us-central1");
        assert_eq!(config.vertex.chat_region(), "us-central1");
        assert_eq!(config.vertex.chat_endpoint_id(), "111");
        assert_eq!(config.vertex.serving_stack, ServingStack::Gemma);
        assert!(config.vertex.credentials_file.is_none());
    }

    #[test]
    fn test_chat_overrides_are_respected() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [vertex]
            project_id = "demo-project"
            region = "europe-west4"
            endpoint_id = "111"
            chat_region = "us-central1"
            chat_endpoint_id = "222"
            serving_stack = "plain"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.vertex.region, "europe-west4");
        assert_eq!(config.vertex.chat_region(), "us-central1");
        assert_eq!(config.vertex.chat_endpoint_id(), "222");
        assert_eq!(config.vertex.serving_stack, ServingStack::Plain);
    }
}
