//! Common error handling utilities for the RustCare risk engine
//!
//! Every crate in the workspace reports failures through [`RustCareError`],
//! and every error carries a stable code from [`codes`] so operators can
//! filter logs without parsing messages.
//!
//! # Error Categories
//!
//! - **IoError**: the underlying file or stream could not be read or written
//! - **DatasetError**: a vitals dataset was present but unusable as a whole
//! - **ConfigError**: configuration sources were invalid or inconsistent
//! - **ValidationError**: caller input rejected before any work was done
//! - **SerializationError**: JSON encoding of a report failed
//! - **InternalError**: anything else
//!
//! # Example
//!
//! ```rust
//! use error_common::{log_error, RustCareError};
//!
//! let err = RustCareError::DatasetError("header row missing".to_string());
//! assert_eq!(err.code(), error_common::codes::dataset::UNREADABLE_CONTENT);
//! log_error("dataset.load", &err);
//! ```

pub mod codes;
pub mod types;

pub use types::*;
