//! Error types for the labour report.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building a report.

use std::fmt;

use thiserror::Error;

/// The input table a rejected record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The worker shift table.
    Shifts,
    /// The sales transaction table.
    Sales,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Shifts => f.write_str("shifts"),
            Table::Sales => f.write_str("sales"),
        }
    }
}

/// The main error type for the labour report.
///
/// Every failure is detected where the raw text is parsed and propagated
/// unchanged; there is no partial-results mode.
///
/// # Example
///
/// ```
/// use labour_report::error::ReportError;
///
/// let error = ReportError::InvalidTimeFormat {
///     value: "9am".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '9am': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A shift or sale time did not match the expected notation.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The text that failed to parse.
        value: String,
    },

    /// Break notes did not match the break grammar.
    #[error("Invalid break notes '{value}': expected a range such as 12.30-1pm")]
    InvalidBreakFormat {
        /// The normalized break text that failed to parse.
        value: String,
    },

    /// A numeric column could not be parsed.
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber {
        /// The column name.
        field: String,
        /// The offending text.
        value: String,
    },

    /// A time resolved to an hour outside the business day.
    #[error("Hour {hour} is outside the 0:00-24:00 day")]
    HourOutOfRange {
        /// The offending hour value.
        hour: String,
    },

    /// An amount grew past what a decimal can hold.
    #[error("Amount overflow computing {what}")]
    AmountOverflow {
        /// The value being computed.
        what: String,
    },

    /// A shift was internally inconsistent.
    #[error("Invalid shift: {message}")]
    InvalidShift {
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A record failed to process; wraps the underlying cause.
    #[error("Rejected {table} row {row}: {source}")]
    RecordRejected {
        /// The table the record came from.
        table: Table,
        /// Zero-based row index within the table.
        row: usize,
        /// The underlying failure.
        #[source]
        source: Box<ReportError>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input table was not found.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An input table was not valid CSV or lacked a required column.
    #[error("Failed to read input file '{path}': {message}")]
    InputParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ReportError {
    /// Wraps this error with the table and row it was raised for.
    pub fn in_record(self, table: Table, row: usize) -> Self {
        ReportError::RecordRejected {
            table,
            row,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through record wrappers.
    pub fn root_cause(&self) -> &ReportError {
        match self {
            ReportError::RecordRejected { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_break_displays_value() {
        let error = ReportError::InvalidBreakFormat {
            value: "lunch".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid break notes 'lunch': expected a range such as 12.30-1pm"
        );
    }

    #[test]
    fn test_invalid_number_displays_field_and_value() {
        let error = ReportError::InvalidNumber {
            field: "pay_rate".to_string(),
            value: "ten".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid number for 'pay_rate': 'ten'");
    }

    #[test]
    fn test_hour_out_of_range_displays_hour() {
        let error = ReportError::HourOutOfRange {
            hour: "24.5".to_string(),
        };
        assert_eq!(error.to_string(), "Hour 24.5 is outside the 0:00-24:00 day");
    }

    #[test]
    fn test_record_rejected_displays_table_row_and_cause() {
        let error = ReportError::InvalidTimeFormat {
            value: "25:00".to_string(),
        }
        .in_record(Table::Shifts, 3);
        assert_eq!(
            error.to_string(),
            "Rejected shifts row 3: Invalid time '25:00': expected HH:MM"
        );
    }

    #[test]
    fn test_root_cause_unwraps_record() {
        let error = ReportError::InvalidNumber {
            field: "amount".to_string(),
            value: "x".to_string(),
        }
        .in_record(Table::Sales, 0);
        assert!(matches!(
            error.root_cause(),
            ReportError::InvalidNumber { .. }
        ));
    }

    #[test]
    fn test_amount_overflow_displays_what() {
        let error = ReportError::AmountOverflow {
            what: "cost for 9:00".to_string(),
        };
        assert_eq!(error.to_string(), "Amount overflow computing cost for 9:00");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReportError::ConfigNotFound {
            path: "/missing/report.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/report.yaml"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ReportError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_shift() -> ReportResult<()> {
            Err(ReportError::InvalidShift {
                message: "end before start".to_string(),
            })
        }

        fn propagates_error() -> ReportResult<()> {
            returns_invalid_shift()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
