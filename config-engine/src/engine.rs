use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{ConfigValidator, RiskConfigValidator};

/// Environment variable prefix, e.g. `RUSTCARE_RISK_DATASET__PATH`
pub const ENV_PREFIX: &str = "RUSTCARE_RISK";

// ============================================================================
// CONFIGURATION MODEL
// ============================================================================

/// Effective configuration for the risk engine and its operator tooling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskEngineConfig {
    pub dataset: DatasetConfig,
    pub synthetic: SyntheticConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Delimited vitals file read by the loader
    pub path: PathBuf,
    /// Substitute generated records when the file yields nothing
    pub fallback_to_synthetic: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/Health_Risk_dataset.csv"),
            fallback_to_synthetic: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub count: usize,
    /// Fixed RNG seed; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl RiskEngineConfig {
    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Layers defaults, an optional YAML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigEngine {
    file: Option<PathBuf>,
    use_env: bool,
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self {
            file: None,
            use_env: true,
        }
    }

    /// YAML file to layer over the defaults. A missing file is skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skip the `RUSTCARE_RISK_*` environment layer
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub fn load(&self) -> Result<RiskEngineConfig> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            tracing::debug!(path = %path.display(), "Adding configuration file source");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Yaml)
                    .required(false),
            );
        }

        if self.use_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let config: RiskEngineConfig = builder.build()?.try_deserialize()?;
        RiskConfigValidator.validate(&config)?;

        tracing::debug!(
            dataset = %config.dataset.path.display(),
            fallback = config.dataset.fallback_to_synthetic,
            synthetic_count = config.synthetic.count,
            "Configuration loaded"
        );

        Ok(config)
    }
}
