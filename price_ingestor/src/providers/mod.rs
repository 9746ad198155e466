//! Source abstraction for price histories.
//!
//! [`SeriesSource`] is the seam between the feature pipeline and wherever the
//! raw observations live. The pipeline only ever asks for one ticker at a time
//! and expects a chronological [`PriceSeries`] back.

pub mod csv_dir;

use crate::{errors::IngestError, models::price_series::PriceSeries};

pub trait SeriesSource {
    /// Loads the full chronological history for `ticker`.
    ///
    /// Returns [`IngestError::NotFound`] when the source has no data for it.
    fn load_series(&self, ticker: &str) -> Result<PriceSeries, IngestError>;
}

impl<S: SeriesSource + ?Sized> SeriesSource for &S {
    fn load_series(&self, ticker: &str) -> Result<PriceSeries, IngestError> {
        (**self).load_series(ticker)
    }
}

impl<S: SeriesSource + ?Sized> SeriesSource for Box<S> {
    fn load_series(&self, ticker: &str) -> Result<PriceSeries, IngestError> {
        (**self).load_series(ticker)
    }
}
