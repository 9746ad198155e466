use std::fs;

use chrono::{Days, NaiveDate};
use feature_builder::{
    Feature, FeatureColumn, FeatureError, FeatureFrame, LOG_VOL_WINDOW, add_normalized_price,
    add_return_and_log_vol, build, build_table, export::export_collection,
};
use price_ingestor::{CsvDirectorySource, IngestError, PricePoint, PriceSeries};
use tempfile::TempDir;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
}

fn series(ticker: &str, prices: &[f64]) -> PriceSeries {
    let points = prices
        .iter()
        .enumerate()
        .map(|(i, p)| PricePoint::new(start_date() + Days::new(i as u64), *p))
        .collect();
    PriceSeries::new(ticker, points)
}

/// Deterministic wiggly price path.
fn price_path(seed: u64, n: usize) -> Vec<f64> {
    let mut state = seed;
    let mut price = 100.0;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let shock = ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            price *= 1.0 + 0.04 * shock;
            price
        })
        .collect()
}

/// Writes a newest-first CSV the way vendors export it.
fn write_csv(dir: &TempDir, ticker: &str, prices: &[f64]) {
    let mut body = String::from("Date,Price\n");
    for (i, p) in prices.iter().enumerate().rev() {
        let date = start_date() + Days::new(i as u64);
        body.push_str(&format!("{},{p}\n", date.format("%Y-%m-%d")));
    }
    fs::write(dir.path().join(format!("{ticker}.csv")), body).unwrap();
}

#[test]
fn constant_return_series_has_no_defined_log_vol() {
    let mut prices = vec![100.0];
    for _ in 1..25 {
        let last = *prices.last().unwrap();
        prices.push(last * 1.01);
    }
    let frame = FeatureFrame::from_series(&series("CONST", &prices));

    let normalized = add_normalized_price(&frame).unwrap();
    let norm = normalized.column(FeatureColumn::NormalizedPrice).unwrap();
    assert_eq!(norm.get(0), Some(1.0));
    assert!((norm.get(24).unwrap() - 1.01f64.powi(24)).abs() < 1e-9);

    let full = add_return_and_log_vol(&normalized);
    let log_vol = full.column(FeatureColumn::LogVolatility20).unwrap();
    assert_eq!(log_vol.len(), 25);
    assert_eq!(log_vol.defined_count(), 0);

    let table = build_table(&series("CONST", &prices)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn output_drops_exactly_the_warmup_rows() {
    let prices = price_path(7, 60);
    let table = build_table(&series("WIGGLE", &prices)).unwrap();

    assert_eq!(table.len(), prices.len() - LOG_VOL_WINDOW);
    assert_eq!(table.dates()[0], start_date() + Days::new(LOG_VOL_WINDOW as u64));
    assert_eq!(table.prices()[0], prices[LOG_VOL_WINDOW]);
    assert_eq!(table.normalized_price()[0], prices[LOG_VOL_WINDOW] / prices[0]);

    let expected_return = prices[LOG_VOL_WINDOW] / prices[LOG_VOL_WINDOW - 1] - 1.0;
    assert_eq!(table.returns()[0], expected_return);
    assert!(table.log_volatility_20().iter().all(|v| v.is_finite()));
    assert_eq!(table.column(Feature::LogVolatility20), table.log_volatility_20());
}

#[test]
fn short_series_yields_empty_table() {
    let table = build_table(&series("SHORT", &price_path(3, LOG_VOL_WINDOW))).unwrap();
    assert!(table.is_empty());

    let table = build_table(&series("JUST", &price_path(3, LOG_VOL_WINDOW + 1))).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn empty_series_is_a_domain_error() {
    let err = build_table(&series("NONE", &[])).unwrap_err();
    assert!(matches!(err, FeatureError::EmptySeries { .. }));
}

#[test]
fn collection_keeps_caller_order() {
    let dir = TempDir::new().unwrap();
    write_csv(&dir, "A", &price_path(1, 40));
    write_csv(&dir, "B", &price_path(2, 45));
    let source = CsvDirectorySource::new(dir.path());

    let collection = build(&source, &["B", "A", "B"]).unwrap();
    assert_eq!(collection.tickers().collect::<Vec<_>>(), vec!["B", "A"]);
    assert_eq!(collection.get("A").unwrap().len(), 20);
    assert_eq!(collection.get("B").unwrap().len(), 25);
    assert!(collection.get("C").is_none());
}

#[test]
fn missing_ticker_aborts_the_build() {
    let dir = TempDir::new().unwrap();
    write_csv(&dir, "A", &price_path(1, 40));
    let source = CsvDirectorySource::new(dir.path());

    let err = build(&source, &["A", "ZZZ"]).unwrap_err();
    match err {
        FeatureError::Ingest(IngestError::NotFound { ticker, .. }) => assert_eq!(ticker, "ZZZ"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn rebuilding_identical_bytes_is_bitwise_identical() {
    let dir = TempDir::new().unwrap();
    write_csv(&dir, "A", &price_path(11, 80));
    let source = CsvDirectorySource::new(dir.path());

    let first = build(&source, &["A"]).unwrap();
    let second = build(&source, &["A"]).unwrap();

    let (a, b) = (first.get("A").unwrap(), second.get("A").unwrap());
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(a.dates(), b.dates());
    assert_eq!(bits(a.normalized_price()), bits(b.normalized_price()));
    assert_eq!(bits(a.returns()), bits(b.returns()));
    assert_eq!(bits(a.log_volatility_20()), bits(b.log_volatility_20()));
}

#[test]
fn export_writes_one_file_per_ticker() {
    let data = TempDir::new().unwrap();
    write_csv(&data, "A", &price_path(1, 30));
    write_csv(&data, "B", &price_path(2, 35));
    let collection = build(&CsvDirectorySource::new(data.path()), &["A", "B"]).unwrap();

    let out = TempDir::new().unwrap();
    let paths = export_collection(&collection, out.path().join("features")).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("A_features.csv"));

    let text = fs::read_to_string(&paths[1]).unwrap();
    assert_eq!(text.lines().count(), 1 + 15);
}
