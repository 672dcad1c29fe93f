//! Error types for the food-deals core.
//!
//! This module defines the centralized error type [`DealsError`] and a type alias
//! [`Result`] used throughout the crate. Errors only arise at the edges of the
//! system (catalog ingestion, configuration, command parsing, clipboard
//! adapters); the deal store, query engine and navigation controller are total.

use thiserror::Error;

/// The main error type for food-deals operations.
///
/// # Examples
///
/// ```
/// use food_deals::DealsError;
///
/// fn parse_sort() -> Result<(), DealsError> {
///     Err(DealsError::Config("unknown sort key: cheapest".to_string()))
/// }
/// assert!(parse_sort().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DealsError {
    /// Catalog could not be loaded or failed ingestion validation.
    ///
    /// Covers malformed fixture JSON, duplicate deal ids and out-of-range
    /// numeric fields. The string describes the offending record.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// Raised for unparseable TOML and for sort keys outside the known set.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A clipboard adapter failed to accept the text.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A session command line could not be understood.
    #[error("Command error: {0}")]
    Command(String),
}

/// A specialized `Result` type for food-deals operations.
pub type Result<T> = std::result::Result<T, DealsError>;
