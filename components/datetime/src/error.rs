//! Error types for date/time values, parsing and name tables

use crate::field::Field;
use scanner::ScanError;
use thiserror::Error;

/// Errors raised by field access and calendar arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    /// In-place mutation of a frozen instance
    #[error("cannot modify a frozen date/time")]
    Frozen,

    /// Attempt to write a field that is only derived
    #[error("field {0} is read-only")]
    ReadOnlyField(Field),

    /// Calendar arithmetic left the representable range
    #[error("{field} value {value} is out of the representable range")]
    OutOfRange {
        /// Field whose value could not be represented
        field: Field,
        /// The offending value
        value: i64,
    },
}

/// Reasons a string could not be turned into a date/time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not match the pattern at some position
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The pattern contains a directive that cannot be parsed
    #[error("directive %{0} is not supported when parsing")]
    UnsupportedDirective(char),

    /// A `%I` value outside `01`-`12`
    #[error("hour {hour} at byte {position} is not on the 12-hour clock")]
    HourOutOfRange {
        /// Cursor position at the start of the hour
        position: usize,
        /// The hour that was read
        hour: i64,
    },

    /// The parsed weekday disagrees with the parsed date
    #[error("weekday {parsed} does not match the date, which falls on weekday {actual}")]
    WeekdayMismatch {
        /// Weekday read from the input (0 = Sunday)
        parsed: u32,
        /// Weekday of the resulting date (0 = Sunday)
        actual: u32,
    },

    /// The parsed fields do not form a representable date/time
    #[error("invalid date: {0}")]
    InvalidDate(#[source] DateTimeError),
}

/// Errors building or loading localized name tables
#[derive(Debug, Error)]
pub enum NameTableError {
    /// A list does not have the expected number of names
    #[error("{table} needs {expected} names, got {found}")]
    WrongLength {
        /// Which list was wrong
        table: &'static str,
        /// Required number of entries
        expected: usize,
        /// Number of entries supplied
        found: usize,
    },

    /// No table registered for the locale
    #[error("no name table for locale {0:?}")]
    UnknownLocale(String),

    /// Malformed JSON configuration
    #[error("invalid name table configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("cannot read name table configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for date/time operations
pub type DateTimeResult<T> = Result<T, DateTimeError>;

/// Result type for parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for name table operations
pub type NameTableResult<T> = Result<T, NameTableError>;
