//! Multi-ticker assembly of feature tables.

use indexmap::IndexMap;
use price_ingestor::{PriceSeries, SeriesSource};
use tracing::{info, warn};

use crate::{
    errors::FeatureError,
    frame::FeatureFrame,
    table::FeatureTable,
    transforms::{add_normalized_price, add_return_and_log_vol, drop_undefined},
};

/// Feature tables keyed by ticker, in the order the tickers were requested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerCollection {
    tables: IndexMap<String, FeatureTable>,
}

impl TickerCollection {
    /// Builds a collection from `(ticker, table)` pairs.
    ///
    /// A repeated ticker keeps its first position and its first table.
    pub fn from_tables<K: Into<String>>(
        tables: impl IntoIterator<Item = (K, FeatureTable)>,
    ) -> Self {
        let mut map = IndexMap::new();
        for (ticker, table) in tables {
            map.entry(ticker.into()).or_insert(table);
        }
        Self { tables: map }
    }

    pub fn get(&self, ticker: &str) -> Option<&FeatureTable> {
        self.tables.get(ticker)
    }

    /// Like [`get`](Self::get), but a missing ticker is an error.
    pub fn try_get(&self, ticker: &str) -> Result<&FeatureTable, FeatureError> {
        self.get(ticker).ok_or_else(|| FeatureError::UnknownTicker {
            ticker: ticker.to_string(),
        })
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureTable)> {
        self.tables.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Runs the full single-ticker pipeline: normalize, return/log-vol, drop.
pub fn build_table(series: &PriceSeries) -> Result<FeatureTable, FeatureError> {
    let frame = FeatureFrame::from_series(series);
    let frame = add_normalized_price(&frame)?;
    let frame = add_return_and_log_vol(&frame);
    drop_undefined(&frame)
}

/// Loads and builds every ticker in order.
///
/// The first failure aborts the whole build; no partial collection is
/// returned.
pub fn build<S, T>(source: &S, tickers: &[T]) -> Result<TickerCollection, FeatureError>
where
    S: SeriesSource + ?Sized,
    T: AsRef<str>,
{
    let span = tracing::info_span!("build", tickers = tickers.len());
    let _enter = span.enter();

    let mut tables: IndexMap<String, FeatureTable> = IndexMap::with_capacity(tickers.len());
    for ticker in tickers {
        let ticker = ticker.as_ref();
        if tables.contains_key(ticker) {
            continue;
        }

        let series = source.load_series(ticker)?;
        let table = build_table(&series)?;
        if table.is_empty() {
            warn!(ticker, raw_rows = series.len(), "feature table is empty");
        }
        tables.insert(ticker.to_string(), table);
    }

    info!(tickers = tables.len(), "built ticker collection");
    Ok(TickerCollection { tables })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> TickerCollection {
        TickerCollection::from_tables([
            ("MSFT", FeatureTable::default()),
            ("AAPL", FeatureTable::default()),
            ("MSFT", FeatureTable::default()),
        ])
    }

    #[test]
    fn keeps_first_insertion_order() {
        let c = collection();
        assert_eq!(c.tickers().collect::<Vec<_>>(), ["MSFT", "AAPL"]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn try_get_reports_unknown_ticker() {
        let c = collection();
        assert!(c.try_get("AAPL").is_ok());

        let err = c.try_get("TSLA").unwrap_err();
        assert!(matches!(err, FeatureError::UnknownTicker { ref ticker } if ticker == "TSLA"));
        assert_eq!(err.to_string(), "Ticker TSLA is not in the collection");
    }
}
