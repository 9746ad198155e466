//! CSV-backed price source: one file per ticker in a directory.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::IngestError,
    models::{price_point::PricePoint, price_series::PriceSeries},
    parse::{is_blank, parse_date, parse_price},
    providers::SeriesSource,
};

pub const DEFAULT_EXTENSION: &str = "csv";

/// Header names of the date and price columns.
///
/// Matching against the file header is case-insensitive and ignores
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
    pub date: String,
    pub price: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            price: "Price".to_string(),
        }
    }
}

/// Reads `<dir>/<ticker>.<extension>` files whose rows are ordered newest first.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    dir: PathBuf,
    extension: String,
    columns: ColumnNames,
}

impl CsvDirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: DEFAULT_EXTENSION.to_string(),
            columns: ColumnNames::default(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the backing file for `ticker`.
    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.dir.join(format!("{ticker}.{}", self.extension))
    }
}

impl SeriesSource for CsvDirectorySource {
    fn load_series(&self, ticker: &str) -> Result<PriceSeries, IngestError> {
        let span = tracing::debug_span!("load_series", ticker);
        let _enter = span.enter();

        let path = self.path_for(ticker);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(IngestError::NotFound {
                    ticker: ticker.to_string(),
                    path,
                });
            }
            Err(e) => return Err(IngestError::Io(e)),
        };

        let series = read_series(ticker, file, &self.columns)?;
        debug!(rows = series.len(), path = %path.display(), "loaded price series");
        Ok(series)
    }
}

/// Parses a newest-first CSV document into a chronological [`PriceSeries`].
///
/// Rows missing either the date or the price cell are skipped. Any other
/// unparseable cell is an error.
pub fn read_series<R: Read>(
    ticker: &str,
    reader: R,
    columns: &ColumnNames,
) -> Result<PriceSeries, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_col = find_column(&headers, &columns.date).ok_or_else(|| IngestError::MissingColumn {
        ticker: ticker.to_string(),
        column: columns.date.clone(),
    })?;
    let price_col =
        find_column(&headers, &columns.price).ok_or_else(|| IngestError::MissingColumn {
            ticker: ticker.to_string(),
            column: columns.price.clone(),
        })?;

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let date_raw = record.get(date_col).unwrap_or("");
        let price_raw = record.get(price_col).unwrap_or("");
        if is_blank(date_raw) || is_blank(price_raw) {
            skipped += 1;
            continue;
        }

        let date = parse_date(date_raw).ok_or_else(|| IngestError::InvalidDate {
            ticker: ticker.to_string(),
            line,
            value: date_raw.to_string(),
        })?;
        let price = parse_price(price_raw).ok_or_else(|| IngestError::InvalidPrice {
            ticker: ticker.to_string(),
            line,
            value: price_raw.to_string(),
        })?;

        points.push(PricePoint::new(date, price));
    }

    if skipped > 0 {
        warn!(ticker, skipped, "skipped incomplete rows");
    }

    Ok(PriceSeries::from_newest_first(ticker, points))
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    headers
        .iter()
        .position(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase() == wanted)
}
