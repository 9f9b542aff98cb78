//! Life Projection CLI
//!
//! Projects a single scenario file and prints a month-by-month preview

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use life_projection::export::{write_monthly_csv, write_yearly_csv};
use life_projection::plan::load_scenario;
use life_projection::{ProjectionConfig, ProjectionEngine};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "life_projection", version, about = "Project net worth month by month")]
struct Args {
    /// Scenario JSON file
    scenario: PathBuf,

    /// First projected month (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Write the monthly series here
    #[arg(long)]
    monthly_csv: Option<PathBuf>,

    /// Write the yearly series here
    #[arg(long)]
    yearly_csv: Option<PathBuf>,

    /// Print the full result as JSON instead of the table preview
    #[arg(long)]
    json: bool,

    /// Number of yearly rows to print
    #[arg(long, default_value_t = 12)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = load_scenario(&args.scenario)
        .with_context(|| format!("loading scenario {}", args.scenario.display()))?;

    let config = match args.start {
        Some(start_date) => ProjectionConfig::starting(start_date),
        None => ProjectionConfig::default(),
    };
    let engine = ProjectionEngine::new(config);
    let result = engine.project(&scenario.params);

    if let Some(path) = &args.monthly_csv {
        write_monthly_csv(path, &result.monthly)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Monthly series written to: {}", path.display());
    }
    if let Some(path) = &args.yearly_csv {
        write_yearly_csv(path, &result.yearly)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Yearly series written to: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Scenario: {}", scenario.name);
    println!("  Start: {}", engine.config().start_date);
    println!("  Months: {}", result.monthly.len());
    println!();

    println!("{:>5} {:>4} {:>14} {:>14} {:>12} {:>12} {:>12} {:>12}",
        "Year", "Age", "Net worth", "Real NW", "Income", "Expenses", "Contrib", "Returns");
    println!("{}", "-".repeat(94));

    for row in result.yearly.iter().take(args.rows) {
        println!("{:>5} {:>4} {:>14.2} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            row.year,
            row.age,
            row.net_worth,
            row.real_net_worth,
            row.income,
            row.expenses,
            row.contribution,
            row.returns,
        );
    }
    if result.yearly.len() > args.rows {
        println!("... ({} more years)", result.yearly.len() - args.rows);
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Final net worth: ${:.2}", summary.final_net_worth);
    println!("  Final real net worth: ${:.2}", summary.final_real_net_worth);
    if let Some(peak_date) = summary.peak_date {
        println!("  Peak net worth: ${:.2} ({})", summary.peak_net_worth, peak_date);
    }
    println!("  Total contributions: ${:.2}", summary.total_contributions);
    println!("  Total returns: ${:.2}", summary.total_returns);
    match summary.depletion_date {
        Some(date) => println!("  Net worth runs out: {}", date),
        None => println!("  Net worth stays positive"),
    }

    Ok(())
}
