use std::path::PathBuf;

use thiserror::Error;

use crate::selector::City;

/// Convenience result type for loading and pipeline operations.
pub type BikeshareResult<T> = Result<T, BikeshareError>;

/// Error type returned by the loader, configuration and pipeline.
///
/// Selector validation has its own error type ([`crate::selector::SelectorError`]) because it is
/// recovered by re-prompting and never aborts a run.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// The city's backing source file does not exist or cannot be opened.
    #[error("source not found for {city}: {} ({source})", path.display())]
    SourceNotFound {
        city: City,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected city has no entry in the data configuration.
    #[error("no data source configured for {city}")]
    CityNotConfigured { city: City },

    /// Underlying I/O error (e.g. reading a config file).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not have the expected columns.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The data configuration file is malformed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
