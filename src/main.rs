//! # solver-times
//!
//! Renders Google Benchmark results from one or more runs as a grouped bar
//! chart: one group per benchmark (named after the first file), one bar per
//! input file.
//!
//! ```bash
//! solver-times before.json after.json          # writes benchmarks.svg
//! solver-times run.csv -o solvers.svg --y-max 1000
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use vortex_charts::chart::bar::BarChart;
use vortex_charts::chart::ChartConfig;
use vortex_charts::data::loader::load_reports;
use vortex_charts::data::model::TimingTable;

/// Solver performance graphs
#[derive(Parser)]
#[command(name = "solver-times")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Benchmark result files (.json or .csv)
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "benchmarks.svg")]
    output: PathBuf,

    /// Chart title
    #[arg(long, default_value = "Solver performance")]
    title: String,

    /// Lower bound of the time axis
    #[arg(long, default_value_t = 0.0)]
    y_min: f64,

    /// Upper bound of the time axis
    #[arg(long, default_value_t = 600.0)]
    y_max: f64,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = ChartConfig {
        title: cli.title,
        output: cli.output,
        y_range: cli.y_min..cli.y_max,
        ..ChartConfig::timings()
    };

    info!("Loading files: {:?}", cli.files);
    let reports = load_reports(&cli.files).context("loading benchmark files")?;

    let table = TimingTable::from_reports(&reports)?;
    let chart = BarChart::from_table(&table, &config)?;
    chart
        .render(&config.output)
        .with_context(|| format!("rendering {}", config.output.display()))?;

    Ok(())
}
