//! Pipeline steps from a raw price frame to a dense feature table.

use tracing::debug;

use crate::{
    column::DerivedColumn,
    errors::FeatureError,
    feature::FeatureColumn,
    frame::FeatureFrame,
    rolling::RollingWindow,
    table::FeatureTable,
};

/// Number of trailing returns in each volatility window.
pub const LOG_VOL_WINDOW: usize = 20;

/// A window whose sample standard deviation is at or below this is treated
/// as zero variance, so its logarithm is undefined.
pub const DEGENERATE_STD_EPSILON: f64 = 1e-12;

/// Adds `normalized_price[i] = price[i] / price[0]`.
///
/// Fails if the frame is empty or its first price is zero or not finite.
pub fn add_normalized_price(frame: &FeatureFrame) -> Result<FeatureFrame, FeatureError> {
    let reference = *frame
        .prices()
        .first()
        .ok_or_else(|| FeatureError::EmptySeries {
            ticker: frame.ticker().to_string(),
        })?;
    if reference == 0.0 || !reference.is_finite() {
        return Err(FeatureError::UndefinedReference {
            ticker: frame.ticker().to_string(),
            price: reference,
        });
    }

    let values = frame.prices().iter().map(|p| Some(p / reference)).collect();
    Ok(frame.with_column(FeatureColumn::NormalizedPrice, DerivedColumn::new(values, 0)))
}

/// Adds the one-period return and the rolling log-volatility columns.
///
/// Returns are defined from row 1. Log-volatility is defined from row
/// [`LOG_VOL_WINDOW`], and only where all returns in its window are defined
/// and their spread is above [`DEGENERATE_STD_EPSILON`].
pub fn add_return_and_log_vol(frame: &FeatureFrame) -> FeatureFrame {
    let returns = DerivedColumn::new(simple_returns(frame.prices()), 1);
    let log_vol = DerivedColumn::new(
        rolling_log_std(returns.values(), LOG_VOL_WINDOW),
        returns.first_defined() + LOG_VOL_WINDOW - 1,
    );

    frame
        .with_column(FeatureColumn::Return, returns)
        .with_column(FeatureColumn::LogVolatility20, log_vol)
}

/// Keeps only rows where every derived column holds a value, reindexed densely.
///
/// The scan starts at the latest `first_defined` among the columns, so the
/// warm-up prefix is skipped without inspecting it.
pub fn drop_undefined(frame: &FeatureFrame) -> Result<FeatureTable, FeatureError> {
    let normalized = require(frame, FeatureColumn::NormalizedPrice)?;
    let returns = require(frame, FeatureColumn::Return)?;
    let log_vol = require(frame, FeatureColumn::LogVolatility20)?;

    let start = frame
        .columns()
        .map(|(_, c)| c.first_defined())
        .max()
        .unwrap_or(0)
        .min(frame.len());

    let mut table = FeatureTable::with_capacity(frame.ticker(), frame.len() - start);
    for row in start..frame.len() {
        if let (Some(n), Some(r), Some(v)) =
            (normalized.get(row), returns.get(row), log_vol.get(row))
        {
            table.push_row(frame.dates()[row], frame.prices()[row], n, r, v);
        }
    }

    debug!(
        ticker = frame.ticker(),
        input_rows = frame.len(),
        kept_rows = table.len(),
        "dropped undefined rows"
    );
    Ok(table)
}

fn require(frame: &FeatureFrame, column: FeatureColumn) -> Result<&DerivedColumn, FeatureError> {
    frame.column(column).ok_or_else(|| FeatureError::MissingColumn {
        ticker: frame.ticker().to_string(),
        column,
    })
}

fn simple_returns(prices: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(prices.len());
    if prices.is_empty() {
        return out;
    }
    out.push(None);
    for w in prices.windows(2) {
        let (prev, cur) = (w[0], w[1]);
        let r = cur / prev - 1.0;
        out.push((prev != 0.0 && r.is_finite()).then_some(r));
    }
    out
}

/// `ln` of the trailing sample standard deviation over `window` values.
///
/// An undefined input empties the window, so a value needs `window`
/// consecutive defined inputs.
fn rolling_log_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut win = RollingWindow::new(window);
    values
        .iter()
        .map(|v| match v {
            None => {
                win.clear();
                None
            }
            Some(x) => {
                win.push(*x);
                win.sample_std_dev().and_then(log_of_std)
            }
        })
        .collect()
}

fn log_of_std(std: f64) -> Option<f64> {
    (std.is_finite() && std > DEGENERATE_STD_EPSILON).then(|| std.ln())
}
