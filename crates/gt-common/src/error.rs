//! Error types for Ghost Triage.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints for automation
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! Errors can be formatted for human consumption with headline, reason, and fix:
//! ```text
//! ✗ Invalid Speed Multiplier
//!   Reason: unrecognized speed multiplier code "110"
//!   Fix: Pass one of the supported codes: 50, 75, 100, 125, 150.
//! ```
//!
//! # Machine-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 10,
//!   "category": "input",
//!   "message": "unrecognized speed multiplier code \"110\"",
//!   "recoverable": true,
//!   "context": { "code_value": "110" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for Ghost Triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Rejected user-supplied values (multiplier codes, counts, names).
    Input,
    /// Regression fitting and numerical errors.
    Regression,
    /// File I/O and observation document errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Regression => write!(f, "regression"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Ghost Triage.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (10-19)
    #[error("unrecognized speed multiplier code \"{code}\"")]
    InvalidSpeedMultiplier { code: String },

    #[error("collectable evidence count {value} is out of range")]
    InvalidCollectableCount { value: u32 },

    #[error("hunt sanity band {value} is not a multiple of 5 in 0-100")]
    InvalidSanityBand { value: u32 },

    #[error("unknown ghost \"{name}\"")]
    UnknownGhost { name: String },

    #[error("unknown evidence kind \"{name}\"")]
    UnknownEvidence { name: String },

    #[error("probability {value} is outside 0-1")]
    InvalidProbability { value: f64 },

    #[error("tap timestamps must be strictly increasing")]
    UnorderedTaps,

    #[error("at least two taps in the same sequence are required")]
    InsufficientTaps,

    // Regression errors (20-29)
    #[error("speed regression failed: {0}")]
    RegressionFit(String),

    // I/O and document errors (30-39)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed observation document: {0}")]
    Document(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Input errors
    /// - 20-29: Regression errors
    /// - 30-39: I/O and document errors
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidSpeedMultiplier { .. } => 10,
            Error::InvalidCollectableCount { .. } => 11,
            Error::InvalidSanityBand { .. } => 12,
            Error::UnknownGhost { .. } => 13,
            Error::UnknownEvidence { .. } => 14,
            Error::InvalidProbability { .. } => 15,
            Error::UnorderedTaps => 16,
            Error::InsufficientTaps => 17,
            Error::RegressionFit(_) => 20,
            Error::Io(_) => 30,
            Error::Document(_) => 31,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidSpeedMultiplier { .. }
            | Error::InvalidCollectableCount { .. }
            | Error::InvalidSanityBand { .. }
            | Error::UnknownGhost { .. }
            | Error::UnknownEvidence { .. }
            | Error::InvalidProbability { .. }
            | Error::UnorderedTaps
            | Error::InsufficientTaps => ErrorCategory::Input,

            Error::RegressionFit(_) => ErrorCategory::Regression,

            Error::Io(_) | Error::Document(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable.
    ///
    /// Input and document errors are recoverable by correcting the supplied
    /// value. A regression fit failure is not: the observation table is fixed
    /// at build time, so a singular fit indicates a bug.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::InvalidSpeedMultiplier { .. } => true,
            Error::InvalidCollectableCount { .. } => true,
            Error::InvalidSanityBand { .. } => true,
            Error::UnknownGhost { .. } => true,
            Error::UnknownEvidence { .. } => true,
            Error::InvalidProbability { .. } => true,
            Error::UnorderedTaps => true,
            Error::InsufficientTaps => true,

            Error::RegressionFit(_) => false,

            Error::Io(_) => true,
            Error::Document(_) => true,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::InvalidSpeedMultiplier { .. } => {
                "Pass one of the supported codes: 50, 75, 100, 125, 150."
            }
            Error::InvalidCollectableCount { .. } => {
                "The collectable evidence count must be 0, 1, 2, or 3."
            }
            Error::InvalidSanityBand { .. } => {
                "Hunt sanity is banded: use a multiple of 5 between 0 and 100."
            }
            Error::UnknownGhost { .. } => {
                "Run 'gt catalog' to list the recognized ghost names."
            }
            Error::UnknownEvidence { .. } => {
                "Run 'gt catalog' to list the recognized evidence kinds."
            }
            Error::InvalidProbability { .. } => {
                "Express the per-trial probability as a fraction between 0 and 1."
            }
            Error::UnorderedTaps => {
                "Tap timestamps are milliseconds and must be listed oldest first."
            }
            Error::InsufficientTaps => {
                "Provide at least two taps no more than two seconds apart."
            }
            Error::RegressionFit(_) => {
                "Internal numerical issue in the fixed tempo table. Please report this as a bug."
            }
            Error::Io(_) => {
                "Check that the observation file exists and is readable, then retry."
            }
            Error::Document(_) => {
                "Validate the observation document syntax with 'cat <file> | jq .'."
            }
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::InvalidSpeedMultiplier { .. } => "Invalid Speed Multiplier",
            Error::InvalidCollectableCount { .. } => "Invalid Collectable Count",
            Error::InvalidSanityBand { .. } => "Invalid Hunt Sanity Band",
            Error::UnknownGhost { .. } => "Unknown Ghost",
            Error::UnknownEvidence { .. } => "Unknown Evidence Kind",
            Error::InvalidProbability { .. } => "Invalid Probability",
            Error::UnorderedTaps => "Unordered Tap Timestamps",
            Error::InsufficientTaps => "Not Enough Taps",
            Error::RegressionFit(_) => "Regression Fit Failed",
            Error::Io(_) => "I/O Error",
            Error::Document(_) => "Malformed Observation Document",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,

    /// Additional structured context (e.g., the rejected value).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::InvalidSpeedMultiplier { code } => {
                context.insert("code_value".to_string(), serde_json::json!(code));
            }
            Error::InvalidCollectableCount { value } => {
                context.insert("value".to_string(), serde_json::json!(value));
            }
            Error::InvalidSanityBand { value } => {
                context.insert("value".to_string(), serde_json::json!(value));
            }
            Error::UnknownGhost { name } => {
                context.insert("name".to_string(), serde_json::json!(name));
            }
            Error::UnknownEvidence { name } => {
                context.insert("name".to_string(), serde_json::json!(name));
            }
            Error::InvalidProbability { value } => {
                context.insert("value".to_string(), serde_json::json!(value));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
