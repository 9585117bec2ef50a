//! Clinical risk scoring engine for RustCare Engine
//!
//! Turns a single vitals sample into a Low / Medium / High risk tier with a
//! capped numeric score and the list of rules that fired. The rule set is
//! fixed and auditable: every classification is a pure function of its input,
//! so callers may share nothing and call from any thread.
//!
//! # Components
//!
//! - **Classifier** ([`classify`]): ordered threshold rules per vital,
//!   folded into a score and a factor list
//! - **Dataset loader** ([`load`]): reads historical labelled vitals from a
//!   comma-separated file, degrading to an empty dataset on any failure
//! - **Synthetic generator** ([`generate_synthetic_dataset`]): labelled demo
//!   data for when no real dataset is deployed
//! - **Analysis** ([`RiskAnalyzer`]): loader, fallback and classifier wired
//!   together the way the risk endpoint consumes them
//! - **Evaluation** ([`evaluate`]): agreement between the rules and the
//!   labels already present in a dataset
//!
//! # Example
//!
//! ```rust
//! use risk_engine::{classify, RiskFactor, RiskLevel, Vitals};
//!
//! let vitals = Vitals {
//!     respiratory_rate: 18.0,
//!     oxygen_saturation: 88.0,
//!     heart_rate: 78.0,
//!     systolic_bp: 128.0,
//!     diastolic_bp: 82.0,
//!     oxygen_therapy: true,
//! };
//!
//! let result = classify(&vitals);
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! assert_eq!(result.risk_score, 55);
//! assert_eq!(
//!     result.factors,
//!     vec![RiskFactor::LowOxygenSaturation, RiskFactor::RequiresOxygenTherapy]
//! );
//! ```

pub mod types;
pub mod classifier;
pub mod dataset;
pub mod synthetic;
pub mod analysis;
pub mod evaluation;

pub use types::*;
pub use classifier::*;
pub use dataset::*;
pub use synthetic::*;
pub use analysis::*;
pub use evaluation::*;
