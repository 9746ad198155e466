use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ticker_charts::{
    AppConfig, FeatureChoice,
    config::apply_env_overrides,
    load_config_path,
    pipeline::{plot_requests, run_export, run_plot},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Per-ticker feature charts from daily price files")]
struct Cli {
    /// TOML configuration; defaults apply without it.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Draw comparative line charts.
    Plot {
        #[arg(long, value_delimiter = ',')]
        tickers: Vec<String>,
        /// Feature name, or `all`.
        #[arg(long)]
        feature: Option<FeatureChoice>,
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Write feature tables as CSV.
    Export {
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
        #[arg(long, value_delimiter = ',')]
        tickers: Vec<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(config: Option<&PathBuf>, tickers: &[String]) -> Result<AppConfig> {
    let mut cfg = match config {
        Some(path) => load_config_path(path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg);
    cfg.with_tickers(tickers)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Plot {
            tickers,
            feature,
            output,
        } => {
            let cfg = load(cli.config.as_ref(), &tickers)?;
            let requests = plot_requests(&cfg, feature, output.as_deref());
            for path in run_plot(&cfg, &requests)? {
                println!("{}", path.display());
            }
        }
        Cmd::Export { out_dir, tickers } => {
            let cfg = load(cli.config.as_ref(), &tickers)?;
            for path in run_export(&cfg, &out_dir)? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
