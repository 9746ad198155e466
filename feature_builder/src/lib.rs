//! Derivation of per-ticker features from daily price histories.
//!
//! The pipeline for one ticker is a chain of pure steps, each returning a new
//! value:
//!
//! 1. [`FeatureFrame::from_series`] wraps a chronological price series.
//! 2. [`add_normalized_price`] rebases prices to the first observation.
//! 3. [`add_return_and_log_vol`] adds one-period returns and the natural log of
//!    their trailing 20-sample standard deviation.
//! 4. [`drop_undefined`] keeps the dense, fully defined rows as a [`FeatureTable`].
//!
//! [`build`] runs this for several tickers and assembles a [`TickerCollection`].

pub mod collection;
pub mod column;
pub mod errors;
pub mod export;
pub mod feature;
pub mod frame;
pub mod rolling;
pub mod table;
pub mod transforms;

pub use collection::{TickerCollection, build, build_table};
pub use column::DerivedColumn;
pub use errors::FeatureError;
pub use feature::{Feature, FeatureColumn};
pub use frame::FeatureFrame;
pub use table::{FeatureRow, FeatureTable};
pub use transforms::{
    DEGENERATE_STD_EPSILON, LOG_VOL_WINDOW, add_normalized_price, add_return_and_log_vol,
    drop_undefined,
};
