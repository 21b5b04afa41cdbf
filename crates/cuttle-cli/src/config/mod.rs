//! Configuration management.

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Secret used for every registration and enrollment in a batch.
    pub enrollment_secret: Option<String>,

    /// Always run strict validation before emitting a batch.
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "learnergo", "cuttle")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a configuration value by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "enrollment_secret" | "secret" => self.enrollment_secret = Some(value.to_string()),
            "strict" => self.strict = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 output_format     - Default output format (pretty/json/csv/yaml)\n  \
                 enrollment_secret - Secret shared by every identity in a batch\n  \
                 strict            - Validate topologies before emitting batches (true/false)",
                key
            ),
        }
        Ok(())
    }
}
