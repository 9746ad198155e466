//! Application configuration: parsing, normalization, and loading.
//!
//! Key behaviors:
//! - Tickers are trimmed and de-duplicated preserving first occurrence; blank
//!   tickers are rejected.
//! - The file extension is stored without a leading dot.
//! - `data_dir` can be overridden through [`DATA_DIR_ENV`] by
//!   [`apply_env_overrides`]; loading alone never reads the environment.
//!
//! Entrypoints: [`load_config_str`], [`load_config_path`].

use std::{
    collections::HashSet,
    mem,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use feature_builder::Feature;
use price_ingestor::providers::csv_dir::{ColumnNames, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};
use shared_utils::env::env_path;
use toml::from_str;

/// Environment variable replacing the configured data directory.
pub const DATA_DIR_ENV: &str = "TICKER_DATA_DIR";

pub const DEFAULT_DATA_DIR: &str = "data";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding one price file per ticker.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// File extension of the price files (e.g. "csv").
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Tickers to load, in plotting order.
    #[serde(default)]
    pub tickers: Vec<String>,
    /// Header names of the date and price columns.
    #[serde(default)]
    pub columns: ColumnNames,
    /// Charts drawn by `plot` when no feature is requested explicitly.
    #[serde(default)]
    pub charts: Vec<ChartCfg>,
}

/// One configured chart.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChartCfg {
    pub feature: Feature,
    /// Destination file; defaults to `charts/<feature>.png`.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            extension: default_extension(),
            tickers: Vec::new(),
            columns: ColumnNames::default(),
            charts: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Replaces the ticker list when `tickers` is non-empty, then re-normalizes.
    pub fn with_tickers(mut self, tickers: &[String]) -> anyhow::Result<Self> {
        if !tickers.is_empty() {
            self.tickers = tickers.to_vec();
            normalize_config(&mut self)?;
        }
        Ok(self)
    }

    /// Checks that the configuration can drive a build.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tickers.is_empty() {
            bail!("no tickers configured: set `tickers` in the config file or pass --tickers");
        }
        Ok(())
    }
}

/// Summary of changes performed during normalization.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Tickers changed by trimming.
    pub tickers_trimmed: usize,
    /// Duplicate tickers removed.
    pub tickers_deduped: usize,
}

/// Normalize a configuration in place.
///
/// Errors:
/// - A ticker that is empty after trimming
/// - An empty file extension
/// - Empty column names
pub fn normalize_config(cfg: &mut AppConfig) -> anyhow::Result<NormalizationReport> {
    let mut report = NormalizationReport::default();

    let raw = mem::take(&mut cfg.tickers);
    let mut seen = HashSet::with_capacity(raw.len());
    let mut tickers = Vec::with_capacity(raw.len());
    for raw_ticker in raw {
        let ticker = raw_ticker.trim();
        if ticker.is_empty() {
            bail!("ticker cannot be empty after trimming");
        }
        if ticker != raw_ticker {
            report.tickers_trimmed += 1;
        }
        if seen.insert(ticker.to_string()) {
            tickers.push(ticker.to_string());
        } else {
            report.tickers_deduped += 1;
        }
    }
    cfg.tickers = tickers;

    let extension = cfg.extension.trim().trim_start_matches('.');
    if extension.is_empty() {
        bail!("extension cannot be empty");
    }
    cfg.extension = extension.to_string();

    for (field, name) in [("date", &mut cfg.columns.date), ("price", &mut cfg.columns.price)] {
        *name = name.trim().to_string();
        if name.is_empty() {
            bail!("columns.{field} cannot be empty");
        }
    }

    Ok(report)
}

/// Replaces `data_dir` when `dir` is set.
pub fn apply_data_dir_override(cfg: &mut AppConfig, dir: Option<PathBuf>) {
    if let Some(dir) = dir {
        cfg.data_dir = dir;
    }
}

/// Applies [`DATA_DIR_ENV`] if present.
pub fn apply_env_overrides(cfg: &mut AppConfig) {
    apply_data_dir_override(cfg, env_path(DATA_DIR_ENV));
}

/// Parse and normalize a configuration from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<AppConfig> {
    let mut cfg: AppConfig = from_str(toml_str).context("failed to parse config TOML")?;
    let report = normalize_config(&mut cfg).context("normalize_config failed")?;
    tracing::debug!(?report, "Config normalized");
    Ok(cfg)
}

/// Read a configuration file from disk, parse, and normalize it.
pub fn load_config_path(path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
