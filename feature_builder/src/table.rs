//! Dense, fully defined feature table for one ticker.

use chrono::NaiveDate;
use serde::Serialize;

use crate::feature::Feature;

/// One row of a [`FeatureTable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRow {
    pub date: NaiveDate,
    pub price: f64,
    pub normalized_price: f64,
    #[serde(rename = "return")]
    pub simple_return: f64,
    pub log_volatility_20: f64,
}

/// Feature rows for one ticker, indexed densely from 0.
///
/// Built once by [`drop_undefined`](crate::drop_undefined); read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureTable {
    ticker: String,
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
    normalized_price: Vec<f64>,
    returns: Vec<f64>,
    log_volatility_20: Vec<f64>,
}

impl FeatureTable {
    pub(crate) fn with_capacity(ticker: &str, capacity: usize) -> Self {
        Self {
            ticker: ticker.to_string(),
            dates: Vec::with_capacity(capacity),
            prices: Vec::with_capacity(capacity),
            normalized_price: Vec::with_capacity(capacity),
            returns: Vec::with_capacity(capacity),
            log_volatility_20: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push_row(
        &mut self,
        date: NaiveDate,
        price: f64,
        normalized_price: f64,
        simple_return: f64,
        log_volatility_20: f64,
    ) {
        self.dates.push(date);
        self.prices.push(price);
        self.normalized_price.push(normalized_price);
        self.returns.push(simple_return);
        self.log_volatility_20.push(log_volatility_20);
    }

    /// Builds a table from complete rows, mainly for callers assembling
    /// collections by hand.
    pub fn from_rows(ticker: &str, rows: impl IntoIterator<Item = FeatureRow>) -> Self {
        let mut table = Self::with_capacity(ticker, 0);
        for r in rows {
            table.push_row(
                r.date,
                r.price,
                r.normalized_price,
                r.simple_return,
                r.log_volatility_20,
            );
        }
        table
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn normalized_price(&self) -> &[f64] {
        &self.normalized_price
    }

    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    pub fn log_volatility_20(&self) -> &[f64] {
        &self.log_volatility_20
    }

    /// Values of a chartable feature, aligned with [`dates`](Self::dates).
    pub fn column(&self, feature: Feature) -> &[f64] {
        match feature {
            Feature::NormalizedPrice => &self.normalized_price,
            Feature::LogVolatility20 => &self.log_volatility_20,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = FeatureRow> + '_ {
        (0..self.len()).map(|i| FeatureRow {
            date: self.dates[i],
            price: self.prices[i],
            normalized_price: self.normalized_price[i],
            simple_return: self.returns[i],
            log_volatility_20: self.log_volatility_20[i],
        })
    }
}
