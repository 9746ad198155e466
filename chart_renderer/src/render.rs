use std::path::Path;

use feature_builder::{Feature, TickerCollection};
use tracing::{debug, info_span};

use crate::{
    errors::RenderError,
    figure::{Figure, LinePlot},
};

/// Plots `feature` for each of `tickers`, in the given order, on one figure.
///
/// Every ticker is looked up before anything is drawn, so a missing ticker
/// leaves `destination` untouched. When `destination` is given the figure is
/// also written there at [`FIGURE_DPI`](crate::FIGURE_DPI).
pub fn render<T: AsRef<str>>(
    tickers: &[T],
    collection: &TickerCollection,
    feature: Feature,
    destination: Option<&Path>,
) -> Result<Figure, RenderError> {
    let _span = info_span!("render", %feature, tickers = tickers.len()).entered();

    let tables = tickers
        .iter()
        .map(|t| {
            let ticker = t.as_ref();
            collection
                .try_get(ticker)
                .map(|table| (ticker, table))
                .map_err(|_| RenderError::MissingTicker {
                    ticker: ticker.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut figure = Figure::new(feature);
    for (ticker, table) in tables {
        debug!(ticker, rows = table.len(), "Adding line");
        figure.add_line(LinePlot::from_table(ticker, table, feature));
    }

    if let Some(path) = destination {
        figure.save(path)?;
    }
    Ok(figure)
}
