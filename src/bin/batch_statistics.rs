//! Evaluate several portfolio files in one run
//!
//! Prints one summary line per portfolio

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use investment_engine::investment::load_investments_from_path;
use investment_engine::{BatchRunner, EngineConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "batch_statistics", about = "Summary statistics for many portfolios")]
struct Args {
    /// Portfolio files (CSV or JSON)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let portfolios = args
        .inputs
        .iter()
        .map(|path| {
            load_investments_from_path(path).with_context(|| format!("Unable to load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = EngineConfig {
        as_of: args.as_of,
        ..Default::default()
    };
    let runner = BatchRunner::new(config);
    let results = runner.run_batch(&portfolios);

    println!("{:<40} {:>6} {:>14} {:>14} {:>10} {:>10} {:>16}",
        "Portfolio", "Count", "Invested", "Value", "G/L %", "CAGR %", "Projected");
    println!("{}", "-".repeat(116));
    for (path, stats) in args.inputs.iter().zip(&results) {
        println!("{:<40} {:>6} {:>14.2} {:>14.2} {:>10.2} {:>10.2} {:>16.2}",
            path.display(),
            stats.investment_count,
            stats.total_invested,
            stats.total_value,
            stats.total_gain_loss_percentage,
            stats.weighted_cagr,
            stats.projected_value,
        );
    }

    println!("\nEvaluated {} portfolios as of {} in {:?}",
        results.len(), runner.engine().as_of(), start.elapsed());
    Ok(())
}
