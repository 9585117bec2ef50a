use error_common::RustCareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration parsing failed: {0}")]
    ParseError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("Configuration rendering failed: {0}")]
    RenderError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for RustCareError {
    fn from(err: ConfigError) -> Self {
        RustCareError::ConfigError(err.to_string())
    }
}
