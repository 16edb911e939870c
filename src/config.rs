use crate::vector::MAX_DIMENSIONS;
use crate::{Result, VectorOpsError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// How the encoder produces the binary result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingStrategy {
    /// Render to text and re-parse it with the shared converter.
    #[default]
    TextRoundTrip,
    /// Write the binary form straight from the float values.
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorOpsConfig {
    /// Dimension bound of the output format. Results reaching it overflow.
    pub max_dimensions: u32,
    /// Fractional mantissa digits used in the textual form. `None` writes the
    /// shortest exact representation.
    pub text_precision: Option<usize>,
    /// Characters of the textual form kept in an overflow diagnostic.
    pub preview_len: usize,
    pub encoding: EncodingStrategy,
}

impl Default for VectorOpsConfig {
    fn default() -> Self {
        Self {
            max_dimensions: MAX_DIMENSIONS,
            text_precision: None,
            preview_len: 32,
            encoding: EncodingStrategy::default(),
        }
    }
}

impl VectorOpsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_dimensions == 0 || self.max_dimensions > MAX_DIMENSIONS {
            return Err(VectorOpsError::ConfigError(format!(
                "max_dimensions must be between 1 and {}, got {}",
                MAX_DIMENSIONS, self.max_dimensions
            )));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .context("Failed to read config file contents")?;

        let config: VectorOpsConfig = serde_json::from_str(&contents)
            .context("Failed to deserialize config from JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        let mut file = File::create(path).context("Failed to create config file for writing")?;

        file.write_all(json.as_bytes())
            .context("Failed to write config file")?;

        Ok(())
    }
}
