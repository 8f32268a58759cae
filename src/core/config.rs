//! Generator configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::Result;
use crate::infrastructure::ports::{DEFAULT_POLL_INTERVAL, MessageConsumerConfig};

/// Settings shared by every generator in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Java package for generated services; the lowercased component name when unset
    pub java_package: Option<String>,
    /// Seconds between polls of generated message consumers
    pub message_poll_interval: f64,
    /// Template root; discovered when unset
    pub template_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            java_package: None,
            message_poll_interval: DEFAULT_POLL_INTERVAL,
            template_dir: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        if !(config.message_poll_interval.is_finite() && config.message_poll_interval > 0.0) {
            return Err(crate::core::Error::config(format!(
                "message_poll_interval must be a positive number, got {}",
                config.message_poll_interval
            )));
        }
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading generator configuration");
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    pub fn message_consumer(&self) -> MessageConsumerConfig {
        MessageConsumerConfig {
            poll_interval: self.message_poll_interval,
        }
    }
}
