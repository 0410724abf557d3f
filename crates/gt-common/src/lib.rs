//! Shared foundation types for Ghost Triage.
//!
//! This crate holds the pieces every other crate needs: the unified error
//! type with stable codes, the CLI output format selector, session identity
//! for correlating output with logs, and the unit formatting helpers used
//! when rendering speed markers and readouts.

pub mod error;
pub mod output;
pub mod session;
pub mod units;

pub use error::{format_error_human, Error, ErrorCategory, Result, StructuredError};
pub use output::OutputFormat;
pub use session::{SessionId, SCHEMA_VERSION};
pub use units::{
    format_bpm, format_meters, format_minutes, format_percent, format_seconds, format_speed,
    format_temperature, TemperatureUnit,
};
