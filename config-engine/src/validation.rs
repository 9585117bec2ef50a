// Configuration validation and schema enforcement
use crate::engine::RiskEngineConfig;
use crate::error::{ConfigError, Result};

pub trait ConfigValidator {
    fn validate(&self, config: &RiskEngineConfig) -> Result<()>;
}

/// Rejects settings the engine cannot run with
#[derive(Debug, Default, Clone, Copy)]
pub struct RiskConfigValidator;

impl ConfigValidator for RiskConfigValidator {
    fn validate(&self, config: &RiskEngineConfig) -> Result<()> {
        if config.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.path must not be empty".to_string(),
            ));
        }

        if config.synthetic.count == 0 {
            return Err(ConfigError::ValidationError(
                "synthetic.count must be greater than zero".to_string(),
            ));
        }

        if config.log.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "log.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
