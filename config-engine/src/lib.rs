//! Configuration management for the RustCare risk engine
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. Built-in defaults
//! 2. An optional YAML file (missing files are skipped)
//! 3. `RUSTCARE_RISK_*` environment variables, `__` separating sections
//!
//! # Example
//!
//! ```yaml
//! dataset:
//!   path: data/Health_Risk_dataset.csv
//!   fallback_to_synthetic: true
//! synthetic:
//!   count: 100
//!   seed: 42
//! log:
//!   level: info
//!   format: pretty
//! ```
//!
//! ```rust,no_run
//! use config_engine::ConfigEngine;
//!
//! # fn main() -> Result<(), config_engine::ConfigError> {
//! let config = ConfigEngine::new()
//!     .with_file("rustcare-risk.yaml")
//!     .load()?;
//! println!("dataset: {}", config.dataset.path.display());
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod validation;
pub mod error;

pub use engine::*;
pub use validation::*;
pub use error::*;
