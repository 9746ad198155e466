//! Price series plus the derived columns computed so far.

use chrono::NaiveDate;
use indexmap::IndexMap;
use price_ingestor::PriceSeries;

use crate::{column::DerivedColumn, feature::FeatureColumn};

/// Intermediate table between loading and dropping undefined rows.
///
/// Frames are never mutated after construction; each pipeline step returns a
/// new frame with one more column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    ticker: String,
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
    columns: IndexMap<FeatureColumn, DerivedColumn>,
}

impl FeatureFrame {
    pub fn from_series(series: &PriceSeries) -> Self {
        Self {
            ticker: series.ticker.clone(),
            dates: series.dates(),
            prices: series.prices(),
            columns: IndexMap::new(),
        }
    }

    /// Returns a copy of this frame with `column` added or replaced.
    ///
    /// # Panics
    /// Panics if the column length differs from the number of rows.
    pub(crate) fn with_column(&self, name: FeatureColumn, column: DerivedColumn) -> Self {
        assert_eq!(
            column.len(),
            self.len(),
            "column {name} must have one value per row"
        );
        let mut next = self.clone();
        next.columns.insert(name, column);
        next
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn column(&self, name: FeatureColumn) -> Option<&DerivedColumn> {
        self.columns.get(&name)
    }

    /// Derived columns in the order they were added.
    pub fn columns(&self) -> impl Iterator<Item = (FeatureColumn, &DerivedColumn)> {
        self.columns.iter().map(|(k, v)| (*k, v))
    }
}
