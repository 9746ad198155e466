//! A chronological price history for a single ticker.

use chrono::NaiveDate;

use crate::models::price_point::PricePoint;

/// Ordered daily observations for one ticker, oldest first.
///
/// The position of a point in `points` is its dense 0-based row index.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// The ticker symbol this data represents (e.g., "AAPL").
    pub ticker: String,
    /// Observations in increasing date order.
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a series from points that are already chronological.
    pub fn new(ticker: impl Into<String>, points: Vec<PricePoint>) -> Self {
        Self {
            ticker: ticker.into(),
            points,
        }
    }

    /// Creates a series from points listed newest first, as data vendors export them.
    pub fn from_newest_first(ticker: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.reverse();
        Self::new(ticker, points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// The first chronological price, if any.
    pub fn first_price(&self) -> Option<f64> {
        self.points.first().map(|p| p.price)
    }

    /// First and last dates, if the series is non-empty.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}
