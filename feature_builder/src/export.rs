//! CSV export of feature tables.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{collection::TickerCollection, errors::FeatureError, table::FeatureTable};

/// Writes `date,price,normalized_price,return,log_volatility_20` rows.
pub fn write_table_csv<W: Write>(table: &FeatureTable, writer: W) -> Result<(), FeatureError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if table.is_empty() {
        // serialize() only emits headers alongside the first record
        wtr.write_record([
            "date",
            "price",
            "normalized_price",
            "return",
            "log_volatility_20",
        ])?;
    }
    for row in table.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// File name used for a ticker's export.
pub fn export_file_name(ticker: &str) -> String {
    format!("{ticker}_features.csv")
}

/// Writes one CSV per ticker into `dir`, creating it if needed.
///
/// Returns the written paths in collection order.
pub fn export_collection(
    collection: &TickerCollection,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, FeatureError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(collection.len());
    for (ticker, table) in collection.iter() {
        let path = dir.join(export_file_name(ticker));
        let file = fs::File::create(&path)?;
        write_table_csv(table, file)?;
        info!(ticker, rows = table.len(), path = %path.display(), "exported feature table");
        written.push(path);
    }
    Ok(written)
}
