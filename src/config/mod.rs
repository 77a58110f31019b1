//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every table is optional and
//! falls back to defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [optimization]
//! budget = 100.0
//! max_per_team = 3
//! expected_points_model = "blend"
//! formations = [[3, 4, 3], [3, 5, 2], [4, 4, 2]]
//! time_limit_secs = 60
//!
//! [paths]
//! data_dir = "./data"
//! output_dir = "./output"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::OptimizationConfig;
use crate::error::{ConfigError, Result};

mod logging;
mod optimization;

pub use logging::LoggingConfig;
pub use optimization::OptimizationSettings;

/// Input and output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Root of the data directory; dumps are read from `<data_dir>/raw`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl PathsConfig {
    /// Directory holding the raw API dumps.
    #[must_use]
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub optimization: OptimizationSettings,
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.paths.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "paths.output_dir",
            }
            .into());
        }
        self.optimization.to_config()?;
        Ok(())
    }

    /// The validated optimization settings in domain form.
    pub fn optimization_config(&self) -> Result<OptimizationConfig> {
        Ok(self.optimization.to_config()?)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
