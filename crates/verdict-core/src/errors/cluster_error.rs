//! Cluster read errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors surfaced by a cluster read capability.
///
/// The platform evaluator absorbs these into a degraded report; they never
/// propagate past the evaluation boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("Cluster unreachable: {message}")]
    Unreachable { message: String },

    #[error("Listing {resource} failed: {message}")]
    ListFailed { resource: String, message: String },

    #[error("Cluster read timed out after {seconds}s")]
    Timeout { seconds: u64 },
}

impl VerdictErrorCode for ClusterError {
    fn error_code(&self) -> &'static str {
        error_code::CLUSTER_ERROR
    }
}
