//! Report ingestion: typed, total parsers for each upstream tool.
//!
//! Every parser maps missing, unreadable, or malformed input to its empty
//! report; ingestion never fails an evaluation run. Severity labels outside
//! the seeded buckets become new zero-initialized counters rather than
//! being dropped, so no finding is lost to an unexpected label.

use std::collections::BTreeMap;

pub mod allure;
pub mod discovery;
pub mod gitleaks;
pub mod grype;
pub mod kpqe;
pub mod sbom;
pub mod semgrep;
pub mod trivy;

pub use discovery::{find_first_json, read_json_value, read_text};

/// Severity counter map with the given buckets seeded to zero.
pub(crate) fn seeded_counts(labels: &[&str]) -> BTreeMap<String, u64> {
    labels.iter().map(|label| (label.to_string(), 0)).collect()
}
