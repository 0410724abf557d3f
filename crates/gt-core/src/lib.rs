//! Ghost Triage Core Library
//!
//! This library provides the deduction and narrowing engine:
//! - Observation state types (evidence marks, secondary tags, factors)
//! - Elimination rules over the candidate catalog
//! - Interestingness analysis for unresolved observations
//! - Speed profiles, tempo regression, and tempo-based narrowing
//! - Hunt safety classification and the confidence counter
//!
//! The binary entry point is in `main.rs`.

pub mod confidence;
pub mod elimination;
pub mod exit_codes;
pub mod interest;
pub mod logging;
pub mod report;
pub mod safety;
pub mod speed;
pub mod state;

pub use report::{DeductionReport, Engine, GhostVerdict};
pub use state::Observations;
