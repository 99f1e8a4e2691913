//! The aggregate release summary: canonical typed shape plus the total
//! normalizer that produces it from arbitrary input.

pub mod normalize;
pub mod types;

pub use normalize::normalize;
pub use types::{Layer1, Layer2, Layer3, Layer4, Layers, ReleaseSummary, SemgrepCounts, VulnCounts};
