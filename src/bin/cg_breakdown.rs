//! # cg-breakdown
//!
//! Renders a CG breakdown file (`label: value` per line) as a pie chart.
//!
//! ```bash
//! cg-breakdown breakdown.txt                   # writes cg_breakdown.svg
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use vortex_charts::chart::pie::PieChart;
use vortex_charts::chart::ChartConfig;
use vortex_charts::data::loader::load_breakdown;

/// CG breakdown
#[derive(Parser)]
#[command(name = "cg-breakdown")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Breakdown file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output SVG path
    #[arg(short, long, default_value = "cg_breakdown.svg")]
    output: PathBuf,

    /// Chart title
    #[arg(long, default_value = "CG breakdown")]
    title: String,

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
        ..ChartConfig::breakdown()
    };

    info!("Loading {}", cli.file.display());
    let breakdown = load_breakdown(&cli.file)
        .with_context(|| format!("loading {}", cli.file.display()))?;

    let chart = PieChart::from_breakdown(&breakdown, &config)?;
    chart
        .render(&config.output)
        .with_context(|| format!("rendering {}", config.output.display()))?;

    Ok(())
}
