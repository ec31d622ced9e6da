/*!
 * Error types for the talking-clock application.
 *
 * This module contains the error raised when a time string cannot be
 * translated, plus the application-level error that wraps it, using the
 * thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when parsing a `HH:MM` time string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no `:` separator at all
    #[error("Missing ':' separator in '{0}'")]
    MissingSeparator(String),

    /// The input splits into more than two colon-separated fields
    #[error("Expected exactly two fields (HH:MM) in '{input}', found {found}")]
    FieldCount {
        /// The offending input
        input: String,
        /// Number of fields found
        found: usize,
    },

    /// A field is empty or not an unsigned decimal integer
    #[error("Invalid {field} '{value}': not an unsigned integer")]
    InvalidNumber {
        /// Which field failed ("hour" or "minute")
        field: &'static str,
        /// The raw field text
        value: String,
    },

    /// Hour is above 23
    #[error("Invalid hour {0}: must be between 0 and 23")]
    HourOutOfRange(u32),

    /// Minute is above 59
    #[error("Invalid minute {0}: must be between 0 and 59")]
    MinuteOutOfRange(u32),
}

impl ParseError {
    /// True when the input had the right shape but a value was out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::HourOutOfRange(_) | Self::MinuteOutOfRange(_))
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from reading input or writing output
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(String),

    /// A line could not be translated
    #[error("Parse error on line {line}: {source}")]
    Parse {
        /// 1-based line (or argument) number
        line: usize,
        /// The underlying parse failure
        #[source]
        source: ParseError,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
