//! Loading of daily price histories from local tabular files.
//!
//! The canonical output is a chronological [`PriceSeries`](models::price_series::PriceSeries).
//! Sources implement [`SeriesSource`](providers::SeriesSource); the bundled
//! [`CsvDirectorySource`](providers::csv_dir::CsvDirectorySource) reads one CSV file
//! per ticker from a directory.

pub mod errors;
pub mod models;
pub mod parse;
pub mod providers;

pub use errors::IngestError;
pub use models::{price_point::PricePoint, price_series::PriceSeries};
pub use providers::{SeriesSource, csv_dir::CsvDirectorySource};
