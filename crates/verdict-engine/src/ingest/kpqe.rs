//! Layer 4: platform gate decision text classification.

use serde::{Deserialize, Serialize};

use verdict_core::constants::{RELEASE_ALLOWED_MARKER, RELEASE_BLOCKED_MARKER};

/// Classified platform gate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpqeDecision {
    Allowed,
    Blocked,
    Unknown,
}

impl KpqeDecision {
    /// Classify free decision text by its literal markers.
    ///
    /// Absence of both markers yields `Unknown`, which is neutral
    /// downstream: a blocked release is never inferred from missing text.
    pub fn classify(text: &str) -> Self {
        if text.contains(RELEASE_ALLOWED_MARKER) {
            Self::Allowed
        } else if text.contains(RELEASE_BLOCKED_MARKER) {
            Self::Blocked
        } else {
            Self::Unknown
        }
    }

    /// The summary-document string for this outcome.
    pub fn as_summary_str(&self) -> &'static str {
        match self {
            Self::Allowed => RELEASE_ALLOWED_MARKER,
            Self::Blocked => RELEASE_BLOCKED_MARKER,
            Self::Unknown => "UNKNOWN",
        }
    }
}
