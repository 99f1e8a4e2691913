//! Decision logic for the Verdict release gate: platform health evaluation,
//! report ingestion, summary normalization, and the precedence-ordered
//! release decision engine.
//!
//! Everything here is a pure function of its inputs plus the cluster read
//! capability; rendering and persistence live with the callers.

pub mod aggregate;
pub mod decision;
pub mod ingest;
pub mod platform;
pub mod report;
pub mod summary;

pub use decision::{Decision, DecisionEngine, DecisionRule, FinalDecision, Verdict};
pub use platform::{PlatformHealthReport, ReleaseDecision};
pub use summary::{normalize, ReleaseSummary};
