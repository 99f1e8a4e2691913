//! Core constants, error taxonomy, configuration, and tracing setup for the
//! Verdict release decision gate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
