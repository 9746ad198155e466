//! Configuration and orchestration behind the `ticker-charts` binary.
//!
//! - [`config`]: TOML settings (data directory, tickers, column names, charts).
//! - [`pipeline`]: load, build and plot/export steps driven by a resolved [`config::AppConfig`].

pub mod config;
pub mod pipeline;

pub use config::{AppConfig, ChartCfg, load_config_path, load_config_str};
pub use pipeline::{
    FeatureChoice, PlotRequest, build_collection, plot_requests, run_export, run_plot,
};
