//! Absence-tolerant report reading and summary document discovery.
//!
//! Absence is a value here, not an exception: readers return `Option` and
//! downstream defaulting handles `None` uniformly.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

/// Read and parse a JSON document, treating absence and corruption as `None`.
pub fn read_json_value(path: &Path) -> Option<Value> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unparseable report treated as absent");
            None
        }
    }
}

/// Read a text file, treating absence as `None`. Surrounding whitespace is
/// trimmed.
pub fn read_text(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

/// Resolve the first candidate path under `root` that yields a parseable
/// JSON document.
///
/// Returns the winning path alongside the document so callers can record it
/// in the reasoning trail.
pub fn find_first_json(root: &Path, candidates: &[String]) -> Option<(PathBuf, Value)> {
    for candidate in candidates {
        let path = root.join(candidate);
        if let Some(value) = read_json_value(&path) {
            debug!(path = %path.display(), "summary document resolved");
            return Some((path, value));
        }
    }
    None
}
