use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the grid layout engine and its collaborators.
#[derive(Error, Debug)]
pub enum GridError {
    /// A configuration value is outside its allowed range.
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// Date arithmetic was asked for a unit it does not know.
    #[error("Invalid time unit '{0}': expected one of year, month, day, hour, minute, second, millisecond")]
    InvalidUnit(String),

    /// Date arithmetic left the representable date range.
    #[error("Date out of range: {date} shifted by {amount} {unit}")]
    DateOutOfRange {
        date: chrono::NaiveDateTime,
        amount: i64,
        unit: &'static str,
    },

    /// Reading or writing a file failed.
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed or produced.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The computed layout could not be written out as JSON.
    #[error("Failed to serialize grid layout: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The timeline would need more columns than a layout allows.
    #[error("Timeline from {start} to {end} needs more than {max} columns")]
    TimelineTooLong {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
        max: usize,
    },

    /// A CSV import could not produce any rows.
    #[error("CSV import failed: {0}")]
    Csv(String),
}

impl GridError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GridError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;
