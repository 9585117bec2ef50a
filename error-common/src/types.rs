use thiserror::Error;

use crate::codes;

/// Error enum shared by the engine crates
#[derive(Error, Debug)]
pub enum RustCareError {
    /// File or stream I/O failures
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset content that cannot be used at all
    #[error("Dataset error: {0}")]
    DatasetError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// JSON encoding errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RustCareError {
    /// Stable error code for structured logs and operator output
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError(err) if err.kind() == std::io::ErrorKind::NotFound => {
                codes::dataset::SOURCE_UNAVAILABLE
            }
            Self::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                codes::dataset::SOURCE_UNAVAILABLE
            }
            Self::IoError(_) | Self::DatasetError(_) => codes::dataset::UNREADABLE_CONTENT,
            Self::ConfigError(_) => codes::configuration::INVALID_CONFIGURATION,
            Self::ValidationError(_) => codes::validation::INVALID_INPUT,
            Self::SerializationError(_) => codes::serialization::ENCODING_FAILED,
            Self::InternalError(_) => codes::system::INTERNAL,
        }
    }
}

/// Result type alias for RustCare operations
pub type Result<T> = std::result::Result<T, RustCareError>;

/// Log an error with its code under the given context label
pub fn log_error(context: &str, error: &RustCareError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "RustCare error occurred"
    );
}
