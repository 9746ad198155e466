//! A single daily observation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily closing observation for a ticker.
///
/// No constraint is placed on `price`; zero and negative values pass through
/// to the feature computations unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Closing price.
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}
