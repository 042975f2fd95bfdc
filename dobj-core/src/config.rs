// Renderer configuration

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Widest label column a configuration may request
pub const MAX_LABEL_WIDTH: usize = 256;
/// Most float decimals a configuration may request
pub const MAX_FLOAT_PRECISION: usize = 64;

/// Layout settings for [`crate::render::Renderer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Width the kind label (`"String:"` etc.) is padded to
    pub label_width: usize,
    /// Fixed number of decimals for floats; shortest representation if unset
    pub float_precision: Option<usize>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            label_width: 12,
            float_precision: None,
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration. Missing keys take their default.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both layout settings are within their limits.
    pub fn validate(&self) -> Result<()> {
        if self.label_width > MAX_LABEL_WIDTH {
            return Err(LoadError::InvalidConfig {
                field: "label_width",
                value: self.label_width,
            });
        }
        match self.float_precision {
            Some(precision) if precision > MAX_FLOAT_PRECISION => {
                Err(LoadError::InvalidConfig {
                    field: "float_precision",
                    value: precision,
                })
            }
            _ => Ok(()),
        }
    }
}
