//! Configuration for the bridge
//!
//! Handles loading and validating the YAML configuration describing the two
//! fixed view layouts. Every field has a default so an empty file (or no
//! file at all) yields a working bridge.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::error::BridgeError;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BridgeConfig {
    /// View layout dimensions
    #[serde(default)]
    pub view: ViewLayoutConfig,
    /// Decimal digits in canonical parameter display strings
    #[serde(default = "default_precision")]
    pub display_precision: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            view: ViewLayoutConfig::default(),
            display_precision: default_precision(),
        }
    }
}

/// Dimensions of the two supported view layouts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewLayoutConfig {
    /// Compact strip layout
    #[serde(default = "default_compact")]
    pub compact: ViewDims,
    /// Full-size layout (the default/reference layout)
    #[serde(default = "default_expanded")]
    pub expanded: ViewDims,
}

/// A (width, height) pair in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewDims {
    pub width: u32,
    pub height: u32,
}

fn default_precision() -> usize {
    2
}

fn default_compact() -> ViewDims {
    ViewDims {
        width: 400,
        height: 100,
    }
}

fn default_expanded() -> ViewDims {
    ViewDims {
        width: 800,
        height: 500,
    }
}

impl Default for ViewLayoutConfig {
    fn default() -> Self {
        Self {
            compact: default_compact(),
            expanded: default_expanded(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a YAML file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: BridgeConfig =
            serde_yaml::from_str(&contents).context("failed to parse config YAML")?;
        config.validate().context("invalid config")?;
        Ok(config)
    }

    /// Check internal consistency
    ///
    /// The expanded layout is the classification reference for view
    /// configurations, so it must dominate the compact one on both axes.
    pub fn validate(&self) -> Result<(), BridgeError> {
        let compact = &self.view.compact;
        let expanded = &self.view.expanded;
        if expanded.width < compact.width || expanded.height < compact.height {
            return Err(BridgeError::Config(format!(
                "expanded layout {}x{} must meet or exceed compact {}x{}",
                expanded.width, expanded.height, compact.width, compact.height
            )));
        }
        if compact.width == 0 || compact.height == 0 {
            return Err(BridgeError::Config(
                "view dimensions must be non-zero".to_string(),
            ));
        }
        if self.display_precision > 6 {
            return Err(BridgeError::Config(format!(
                "display_precision {} exceeds the maximum of 6 digits",
                self.display_precision
            )));
        }
        Ok(())
    }
}
