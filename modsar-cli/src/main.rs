//! modsar CLI — modified parabolic SAR trend analysis.
//!
//! Commands:
//! - `analyze` — compute the indicator over a CSV file of daily bars and
//!   report the latest trend, stop level, and distance from close

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use modsar_core::domain::Bar;
use modsar_core::sar::{ModifiedSar, Trend};
use modsar_core::summary::TrendSnapshot;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "modsar", about = "modsar CLI — modified parabolic SAR trend analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the indicator over a CSV bar file and report the latest state.
    Analyze {
        /// CSV file with date,open,high,low,close columns, ascending by date.
        input: PathBuf,

        /// Initial acceleration factor (also the per-step increment).
        #[arg(long, default_value_t = 0.02)]
        af_start: f64,

        /// Acceleration factor ceiling.
        #[arg(long, default_value_t = 0.2)]
        af_limit: f64,

        /// Print the full per-bar series before the summary.
        #[arg(long, default_value_t = false)]
        series: bool,
    },
}

fn load_bars(path: &Path) -> Result<Vec<Bar>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let mut bars = Vec::new();
    for record in reader.deserialize() {
        let bar: Bar = record.with_context(|| format!("bad record in {}", path.display()))?;
        bars.push(bar);
    }
    if bars.is_empty() {
        bail!("no bars in {}", path.display());
    }
    Ok(bars)
}

fn cmd_analyze(input: &Path, af_start: f64, af_limit: f64, series: bool) -> Result<()> {
    let bars = load_bars(input)?;
    let sar = ModifiedSar::new(af_start, af_limit)?;
    let points = sar.compute(&bars)?;

    if series {
        println!("{:<12} {:>10} {:>10}  trend", "date", "close", "stop");
        for (bar, point) in bars.iter().zip(&points) {
            let marker = match point.trend {
                Trend::Up => '+',
                Trend::Down => '-',
            };
            println!(
                "{:<12} {:>10.2} {:>10.2}  {} {}",
                bar.date, bar.close, point.stop, marker, point.trend
            );
        }
        println!();
    }

    match TrendSnapshot::from_series(&bars, &points) {
        Some(snapshot) => println!("{} bars — {}", bars.len(), snapshot),
        None => bail!("no output produced"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            af_start,
            af_limit,
            series,
        } => cmd_analyze(&input, af_start, af_limit, series),
    }
}
