//! Error types for ppr.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for ppr operations.
pub type Result<T> = std::result::Result<T, PprError>;

/// Errors that can occur while downloading and processing the register.
#[derive(Error, Debug)]
pub enum PprError {
    /// Server answered with a status other than 200.
    #[error("Failed to download file: status code {status}")]
    Fetch {
        /// HTTP status code.
        status: u16,
    },

    /// HTTP request failed before a status was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Downloaded bytes are not valid Windows-1252.
    #[error("Byte 0x{byte:02X} at offset {offset} is not valid Windows-1252")]
    Decode {
        /// Offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// The bulk archive could not be opened or was empty.
    #[error("Archive error: {0}")]
    Archive(String),

    /// CSV content did not match the register format.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Filter criteria are contradictory.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Month outside 1..=12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// County name not in the register.
    #[error("Unknown county: {0}")]
    UnknownCounty(String),
}

/// Errors raised while coercing register CSV into typed records.
///
/// Line numbers are 1-based and count the header as line 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required column header is absent.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Sale date is not `dd/mm/yyyy`.
    #[error("Line {line}: invalid date '{value}' (expected dd/mm/yyyy)")]
    InvalidDate {
        /// Line of the offending row.
        line: u64,
        /// Raw cell content.
        value: String,
    },

    /// Price is not numeric once the currency symbol and separators are removed.
    #[error("Line {line}: invalid price '{value}'")]
    InvalidPrice {
        /// Line of the offending row.
        line: u64,
        /// Raw cell content.
        value: String,
    },

    /// A Yes/No column held something else (strict mode only).
    #[error("Line {line}: invalid {column} value '{value}' (expected Yes or No)")]
    InvalidFlag {
        /// Line of the offending row.
        line: u64,
        /// Column header.
        column: String,
        /// Raw cell content.
        value: String,
    },

    /// Malformed CSV framing.
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Error for contradictory filter bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Minimum date is after maximum date.
    #[error("Invalid date bounds: {min} > {max}")]
    InvalidDateRange {
        /// The minimum date.
        min: NaiveDate,
        /// The maximum date.
        max: NaiveDate,
    },

    /// Minimum price is above maximum price.
    #[error("Invalid price bounds: {min} > {max}")]
    InvalidPriceRange {
        /// The minimum price.
        min: f64,
        /// The maximum price.
        max: f64,
    },

    /// A price bound is NaN.
    #[error("Price bound is not a number")]
    NanPrice,
}
