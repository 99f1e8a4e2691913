//! Report ingestion and rendering errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors that can occur while resolving, reading, or rendering reports.
///
/// Transient read failures inside ingestion are absorbed into neutral
/// defaults and never surface as these errors; this type covers the cases
/// the top-level caller is allowed to treat as fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Release summary not found; searched {} paths", searched.len())]
    SummaryNotFound { searched: Vec<String> },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to render {format} report: {message}")]
    RenderFailed { format: String, message: String },

    #[error("Unknown report format: {format}")]
    UnknownFormat { format: String },
}

impl VerdictErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
