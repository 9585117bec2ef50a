use std::io;

use config_engine::{LogConfig, LogFormat};
use error_common::{Result, RustCareError};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so the
/// JSON written to stdout stays parseable.
pub fn init_tracing(log: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .map_err(|e| RustCareError::ConfigError(format!("invalid log level '{}': {e}", log.level)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match log.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(io::stderr)
                    .json(),
            )
            .try_init(),
    };

    result.map_err(|e| RustCareError::InternalError(format!("failed to install tracing subscriber: {e}")))
}
