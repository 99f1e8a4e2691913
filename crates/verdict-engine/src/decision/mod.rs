//! Release decision: verdict types and the precedence-ordered engine.

pub mod engine;
pub mod types;

pub use engine::{DecisionEngine, DecisionRule};
pub use types::{Decision, FinalDecision, Verdict};
