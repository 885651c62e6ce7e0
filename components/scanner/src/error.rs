//! Error types for the scanner
//!
//! Every variant means the same thing to a caller: the input does not match
//! the expected micro-format at the recorded position.

use thiserror::Error;

/// Failure of a single scan operation.
///
/// Positions are byte offsets into the scanned string and always name the
/// cursor as it was *before* the failing call, which is also where the
/// cursor is left afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Fewer characters remain than were requested
    #[error("out of bounds: requested {requested} characters at byte {position}, {remaining} remaining")]
    OutOfBounds {
        /// Cursor position at the time of the request
        position: usize,
        /// Number of characters requested
        requested: usize,
        /// Number of characters left in the string
        remaining: usize,
    },

    /// The consumed window was not made only of decimal digits
    #[error("not an integer: found {found:?} at byte {position}")]
    NotAnInteger {
        /// Cursor position at the start of the window
        position: usize,
        /// The offending window
        found: String,
    },

    /// The consumed window did not equal the string to skip
    #[error("expected {expected:?} at byte {position}, found {found:?}")]
    SkipMismatch {
        /// Cursor position at the start of the window
        position: usize,
        /// The string that had to be skipped
        expected: String,
        /// What was actually there
        found: String,
    },

    /// None of the candidate strings matched at the cursor
    #[error("no candidate matched at byte {position}")]
    NoArrayMatch {
        /// Cursor position at the time of the probe
        position: usize,
    },
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
