use price_ingestor::IngestError;
use thiserror::Error;

use crate::feature::FeatureColumn;

/// Errors raised while deriving or exporting features.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Loading the raw series failed, including the not-found case.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Normalization needs a first observation to divide by.
    #[error("Cannot normalize ticker {ticker}: price series is empty")]
    EmptySeries { ticker: String },

    /// The first observation cannot act as a divisor.
    #[error("Cannot normalize ticker {ticker}: reference price {price} is zero or not finite")]
    UndefinedReference { ticker: String, price: f64 },

    /// A lookup named a ticker the collection does not hold.
    #[error("Ticker {ticker} is not in the collection")]
    UnknownTicker { ticker: String },

    /// A step ran before the columns it depends on were added.
    #[error("Ticker {ticker}: frame has no {column} column")]
    MissingColumn {
        ticker: String,
        column: FeatureColumn,
    },

    /// Writing an export failed in the CSV layer.
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

