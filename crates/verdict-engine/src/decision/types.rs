//! Verdict and decision types.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::summary::ReleaseSummary;

/// Three-valued release verdict.
///
/// HOLD marks a reviewable-but-not-immediately-blocking condition, distinct
/// from an outright block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "NO-GO")]
    NoGo,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::Hold => "HOLD",
            Self::NoGo => "NO-GO",
        }
    }

    /// Whether this verdict should fail the pipeline.
    ///
    /// HOLD blocking is policy; callers consult configuration before
    /// applying it. The engine itself never maps verdicts to exit codes.
    pub fn blocks_release(&self, fail_on_hold: bool) -> bool {
        match self {
            Self::Go => false,
            Self::Hold => fail_on_hold,
            Self::NoGo => true,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verdict plus the ordered reasoning trail that produced it.
///
/// Reasoning order is part of the contract: one audit line per rule in
/// inspection order, then the matched rule's reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub reasoning: Vec<String>,
}

/// Serialized form of one run's final decision (`final-decision.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalDecision {
    /// RFC 3339 UTC timestamp of decision time.
    pub generated_at: String,
    pub repo: Option<String>,
    pub commit: Option<String>,
    pub run_id: Option<String>,
    pub run_link: Option<String>,
    pub final_decision: Verdict,
    pub reasoning: Vec<String>,
}

impl FinalDecision {
    /// Stamp a decision with run metadata and the current UTC time.
    pub fn stamp(decision: &Decision, summary: &ReleaseSummary) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            repo: summary.repo.clone(),
            commit: summary.commit.clone(),
            run_id: summary.run_id.clone(),
            run_link: summary.run_link.clone(),
            final_decision: decision.verdict,
            reasoning: decision.reasoning.clone(),
        }
    }
}
