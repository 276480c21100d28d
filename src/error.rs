//! Error types for the shift schedule converter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a conversion request can surface. Lookup-level failures
//! are also represented here, but callers degrade on them instead of
//! returning them to the user.

use thiserror::Error;

/// The main error type for the shift schedule converter.
///
/// # Example
///
/// ```
/// use shift_converter::error::ConverterError;
///
/// let error = ConverterError::SheetNotFound {
///     sheet: "Schedule".to_string(),
/// };
/// assert_eq!(error.to_string(), "Sheet not found in workbook: Schedule");
/// ```
#[derive(Debug, Error)]
pub enum ConverterError {
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

    /// No schedule workbook was supplied with the request.
    #[error("No schedule workbook was supplied")]
    ScheduleMissing,

    /// The designated schedule sheet is absent from the uploaded workbook.
    #[error("Sheet not found in workbook: {sheet}")]
    SheetNotFound {
        /// The sheet name that was looked up.
        sheet: String,
    },

    /// The uploaded workbook could not be decoded.
    #[error("Failed to read workbook: {message}")]
    WorkbookUnreadable {
        /// A description of the decoding failure.
        message: String,
    },

    /// The output workbook could not be produced.
    #[error("Failed to write workbook: {message}")]
    WorkbookWriteFailed {
        /// A description of the encoding failure.
        message: String,
    },

    /// A cutoff value was not a decimal integer.
    #[error("Invalid cutoff '{value}': expected a decimal integer")]
    InvalidCutoff {
        /// The rejected cutoff string.
        value: String,
    },

    /// The requested year/month does not name a representable calendar month.
    #[error("Invalid period {year}-{month}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
    },

    /// A lookup URL did not contain a spreadsheet document identifier.
    #[error("Invalid lookup URL: {url}")]
    InvalidLookupUrl {
        /// The rejected URL.
        url: String,
    },

    /// Fetching or decoding a lookup sheet failed.
    #[error("Lookup fetch failed for '{url}': {message}")]
    LookupFetchFailed {
        /// The URL that was fetched.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// Lookup CSV text could not be tokenized.
    #[error("Malformed CSV: {message}")]
    MalformedCsv {
        /// A description of the tokenizer error.
        message: String,
    },

    /// The HTTP client used for lookups could not be built.
    #[error("HTTP client error: {message}")]
    HttpClientError {
        /// A description of the builder error.
        message: String,
    },

    /// A download request did not carry a proper record sequence.
    #[error("Malformed output request: {message}")]
    MalformedOutputRequest {
        /// A description of what was wrong with the payload.
        message: String,
    },
}

/// A type alias for Results that return ConverterError.
pub type ConverterResult<T> = Result<T, ConverterError>;
