//! Service configuration loading.
//!
//! Reads an optional YAML file; every field has a default so a missing file
//! or a partial file both work.

use std::path::Path;

use anyhow::{Context, Result};
use geo_common::CoordinateOrder;
use serde::{Deserialize, Serialize};
use wkt_parser::ParserConfig;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Order used for requests that don't pass `?order=`.
    #[serde(default)]
    pub default_order: CoordinateOrder,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Pretty-print JSON responses.
    #[serde(default)]
    pub pretty: bool,
}

fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_order: CoordinateOrder::default(),
            max_body_bytes: default_max_body_bytes(),
            pretty: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from a YAML file.
    ///
    /// A path that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file does not exist, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;

        tracing::info!(
            path = %path.display(),
            default_order = %config.default_order,
            max_body_bytes = config.max_body_bytes,
            "Loaded geometry API config"
        );

        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parser configuration derived from this config.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::with_order(self.default_order)
    }
}
