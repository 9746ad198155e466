//! Steps run by the `plot` and `export` subcommands.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use chart_renderer::render;
use feature_builder::{
    Feature, TickerCollection, build, export::export_collection, feature::UnknownFeature,
};
use price_ingestor::CsvDirectorySource;
use tracing::info;

use crate::config::AppConfig;

/// Directory used for charts without an explicit destination.
pub const DEFAULT_CHART_DIR: &str = "charts";

/// A `--feature` argument: one feature or every feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureChoice {
    One(Feature),
    All,
}

impl FeatureChoice {
    pub fn features(&self) -> Vec<Feature> {
        match self {
            Self::One(f) => vec![*f],
            Self::All => Feature::ALL.to_vec(),
        }
    }
}

impl FromStr for FeatureChoice {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}

impl fmt::Display for FeatureChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(feature) => fmt::Display::fmt(feature, f),
            Self::All => f.write_str("all"),
        }
    }
}

/// One chart to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRequest {
    pub feature: Feature,
    pub output: PathBuf,
}

/// `<dir>/<feature>.png`
pub fn default_output(dir: &Path, feature: Feature) -> PathBuf {
    dir.join(format!("{}.png", feature.as_str()))
}

/// Resolves which charts `plot` draws and where they go.
///
/// Without `--feature` the configured charts are used, falling back to every
/// feature. `output` is the destination file for a single chart and the
/// destination directory when several are drawn.
pub fn plot_requests(
    cfg: &AppConfig,
    feature: Option<FeatureChoice>,
    output: Option<&Path>,
) -> Vec<PlotRequest> {
    let planned: Vec<(Feature, Option<PathBuf>)> = match feature {
        Some(choice) => choice.features().into_iter().map(|f| (f, None)).collect(),
        None if !cfg.charts.is_empty() => cfg
            .charts
            .iter()
            .map(|c| (c.feature, c.output.clone()))
            .collect(),
        None => Feature::ALL.iter().map(|f| (*f, None)).collect(),
    };

    let single = planned.len() == 1;
    planned
        .into_iter()
        .map(|(feature, configured)| {
            let output = match (output, configured) {
                (Some(path), _) if single => path.to_path_buf(),
                (Some(dir), _) => default_output(dir, feature),
                (None, Some(path)) => path,
                (None, None) => default_output(Path::new(DEFAULT_CHART_DIR), feature),
            };
            PlotRequest { feature, output }
        })
        .collect()
}

/// Reader for the configured data directory.
pub fn source_for(cfg: &AppConfig) -> CsvDirectorySource {
    CsvDirectorySource::new(&cfg.data_dir)
        .with_extension(cfg.extension.clone())
        .with_columns(cfg.columns.clone())
}

/// Loads and featurizes every configured ticker.
pub fn build_collection(cfg: &AppConfig) -> anyhow::Result<TickerCollection> {
    cfg.validate()?;
    let source = source_for(cfg);
    build(&source, &cfg.tickers).with_context(|| {
        format!(
            "failed to build features from {}",
            cfg.data_dir.display()
        )
    })
}

/// Draws each request; returns the written paths.
pub fn run_plot(cfg: &AppConfig, requests: &[PlotRequest]) -> anyhow::Result<Vec<PathBuf>> {
    let collection = build_collection(cfg)?;
    let mut written = Vec::with_capacity(requests.len());
    for req in requests {
        render(&cfg.tickers, &collection, req.feature, Some(req.output.as_path()))
            .with_context(|| format!("failed to render {} chart", req.feature))?;
        info!(feature = %req.feature, path = %req.output.display(), "Chart written");
        written.push(req.output.clone());
    }
    Ok(written)
}

/// Writes one feature CSV per ticker into `out_dir`.
pub fn run_export(cfg: &AppConfig, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let collection = build_collection(cfg)?;
    export_collection(&collection, out_dir)
        .with_context(|| format!("failed to export features to {}", out_dir.display()))
}
