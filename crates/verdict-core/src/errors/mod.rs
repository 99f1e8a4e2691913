//! Error taxonomy for the Verdict release gate.
//!
//! One `thiserror` enum per domain; every error type exposes a stable code
//! via [`VerdictErrorCode`] for machine-readable classification.

pub mod cluster_error;
pub mod config_error;
pub mod error_code;
pub mod report_error;

pub use cluster_error::ClusterError;
pub use config_error::ConfigError;
pub use error_code::VerdictErrorCode;
pub use report_error::ReportError;
