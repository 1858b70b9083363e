//! Investment Engine CLI
//!
//! Prints returns, portfolio statistics and a yearly projection for a
//! file of investment records

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use investment_engine::investment::load_investments_from_path;
use investment_engine::{EngineConfig, InvestmentReturns, InvestmentStatistics, PortfolioEngine, PortfolioProjection};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "investment_engine", version, about = "Portfolio return and projection report")]
struct Args {
    /// Investments file (CSV, or JSON when the extension is .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Projection horizon in years (at most 200)
    #[arg(long)]
    years: Option<u32>,

    /// JSON engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Also write per-investment returns to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    as_of: NaiveDate,
    investments: &'a [InvestmentReturns],
    statistics: &'a InvestmentStatistics,
    projection: &'a PortfolioProjection,
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("Unable to read config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(as_of) = args.as_of {
        config.as_of = Some(as_of);
    }
    if let Some(years) = args.years {
        config.projection_years = years;
        config.projection_points = years;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let investments = load_investments_from_path(&args.input)
        .with_context(|| format!("Unable to load investments from {}", args.input.display()))?;

    let engine = PortfolioEngine::new(config);
    let (returns, stats) = engine.evaluate(&investments);
    let projection = engine.projections(&investments);

    if let Some(path) = &args.csv {
        write_returns_csv(path, &returns)?;
    }

    if args.json {
        let report = Report {
            as_of: engine.as_of(),
            investments: &returns,
            statistics: &stats,
            projection: &projection,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(engine.as_of(), &returns, &stats, &projection);
    Ok(())
}

fn write_returns_csv(path: &Path, returns: &[InvestmentReturns]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create CSV file {}", path.display()))?;
    for row in returns {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!("Wrote {} rows to {}", returns.len(), path.display());
    Ok(())
}

fn print_report(
    as_of: NaiveDate,
    returns: &[InvestmentReturns],
    stats: &InvestmentStatistics,
    projection: &PortfolioProjection,
) {
    println!("Portfolio as of {}", as_of);
    println!("======================\n");

    println!("{:<24} {:<16} {:>12} {:>12} {:>12} {:>8} {:>12} {:>8}",
        "Name", "Type", "Invested", "Value", "Gain/Loss", "G/L %", "Est. Yearly", "Est. %");
    println!("{}", "-".repeat(112));
    for row in returns {
        println!("{:<24} {:<16} {:>12.2} {:>12.2} {:>12.2} {:>8.2} {:>12.2} {:>8.2}",
            row.name,
            row.investment_type.as_str(),
            row.invested_value,
            row.current_value,
            row.total_gain_loss,
            row.total_gain_loss_percentage,
            row.estimated_yearly_gain_loss,
            row.estimated_yearly_gain_loss_percentage,
        );
    }

    println!("\nSummary:");
    println!("  Investments: {}", stats.investment_count);
    println!("  Total Invested: {:.2}", stats.total_invested);
    println!("  Total Value: {:.2}", stats.total_value);
    println!("  Total Value (after tax): {:.2}", stats.total_value_after_tax);
    println!("  Total Gain/Loss: {:.2} ({:.2}%)", stats.total_gain_loss, stats.total_gain_loss_percentage);
    println!("  Dividends/Interest Earned: {:.2}", stats.total_dividends_interest);
    println!("  Yearly Dividends/Interest: {:.2}", stats.yearly_dividend_interest);
    println!("  Yearly Capital Gains: {:.2}", stats.yearly_capital_gains);
    println!("  Weighted CAGR: {:.2}%", stats.weighted_cagr);
    println!("  Expected Yield: {:.2}%", stats.expected_yield);
    println!("  Est. Yearly Gain/Loss: {:.2} ({:.2}%)",
        stats.estimated_yearly_gain_loss, stats.estimated_yearly_gain_loss_percentage);
    println!("  Average Tax Rate: {:.2}%", stats.average_tax_rate);
    println!("  Projected Value ({} years): {:.2}", stats.projection_years, stats.projected_value);

    if !stats.type_breakdown.is_empty() {
        println!("\nBy Type:");
        for (investment_type, breakdown) in &stats.type_breakdown {
            println!("  {:<16} {:>3} holdings  value {:>12.2}  invested {:>12.2}  gain/loss {:>12.2}",
                investment_type.as_str(),
                breakdown.count,
                breakdown.value,
                breakdown.invested_value,
                breakdown.gain_loss,
            );
        }
    }

    println!("\nProjection:");
    for point in &projection.series {
        println!("  Year {:>3}: {:>14.2}", point.year, point.value);
    }
}
