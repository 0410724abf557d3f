//! Exit codes for the gt CLI.
//!
//! Exit codes communicate operation outcome without requiring output parsing.
//!
//! Exit code ranges:
//! - 0: Success
//! - 2-4: User/environment errors (recoverable by user action)
//! - 20+: Internal errors (bugs, should be reported)

use gt_common::Error;

/// Exit codes for gt operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: report produced.
    Success = 0,

    /// Invalid arguments or observation values.
    InvalidInput = 2,

    /// I/O failure reading the observation document.
    Io = 3,

    /// Observation document did not parse.
    MalformedDocument = 4,

    /// Internal error (bug - please report).
    Internal = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Check if this exit code is a user/environment error (codes 2-4).
    /// These can be resolved by user action.
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (2..5).contains(&code)
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Success => "OK",
            ExitCode::InvalidInput => "ERR_INPUT",
            ExitCode::Io => "ERR_IO",
            ExitCode::MalformedDocument => "ERR_DOCUMENT",
            ExitCode::Internal => "ERR_INTERNAL",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Io(_) => ExitCode::Io,
            Error::Document(_) => ExitCode::MalformedDocument,
            Error::RegressionFit(_) => ExitCode::Internal,
            _ => ExitCode::InvalidInput,
        }
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
