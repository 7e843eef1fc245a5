//! Sales data error types
//!
//! Defines all errors that can occur while generating, reshaping, or
//! serializing the sales dataset.

use chrono::NaiveDate;
use thiserror::Error;

use super::types::Region;

/// Errors that can occur in the sales data layer
#[derive(Error, Debug)]
pub enum SalesError {
    /// Region name is not one of the fixed four
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Generator parameters are unusable
    #[error("Invalid generator parameters: {0}")]
    InvalidParams(String),

    /// Two rows share the same (date, region) cell of a pivot
    #[error("Duplicate entry for {region} on {date}")]
    DuplicateEntry { date: NaiveDate, region: Region },

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for sales data operations
pub type SalesResult<T> = Result<T, SalesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SalesError::UnknownRegion("Central".to_string());
        assert_eq!(err.to_string(), "Unknown region: Central");

        let err = SalesError::DuplicateEntry {
            date: NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            region: Region::North,
        };
        assert_eq!(err.to_string(), "Duplicate entry for North on 2023-01-31");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sales_err: SalesError = io_err.into();
        assert!(matches!(sales_err, SalesError::Io(_)));
    }
}
