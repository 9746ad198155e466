use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for the `price_ingestor` crate.
#[derive(Debug, Error)]
pub enum IngestError {
    /// No backing data exists for the requested ticker.
    #[error("No price data found for ticker {ticker} (expected {})", path.display())]
    NotFound { ticker: String, path: PathBuf },

    /// The header row lacks a required column.
    #[error("Ticker {ticker}: missing required column {column:?}")]
    MissingColumn { ticker: String, column: String },

    /// A date cell could not be parsed with any supported format.
    #[error("Ticker {ticker}, line {line}: invalid date {value:?}")]
    InvalidDate {
        ticker: String,
        line: u64,
        value: String,
    },

    /// A price cell is not a number.
    #[error("Ticker {ticker}, line {line}: invalid price {value:?}")]
    InvalidPrice {
        ticker: String,
        line: u64,
        value: String,
    },

    /// Malformed CSV input.
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
