//! Project every scenario in a directory and write one summary row each
//!
//! Usage: cargo run --bin run_scenarios -- scenarios/ --out scenario_summary.csv

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use life_projection::plan::load_scenarios_in_dir;
use life_projection::{ProjectionConfig, ScenarioRunner};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_scenarios", about = "Project a directory of scenarios in parallel")]
struct Args {
    /// Directory of scenario JSON files
    dir: PathBuf,

    /// First projected month (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Summary CSV output path
    #[arg(long, default_value = "scenario_summary.csv")]
    out: PathBuf,
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    scenario: &'a str,
    months: usize,
    final_net_worth: f64,
    final_real_net_worth: f64,
    peak_net_worth: f64,
    peak_date: Option<NaiveDate>,
    total_contributions: f64,
    total_returns: f64,
    depletion_date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let scenarios = load_scenarios_in_dir(&args.dir)
        .with_context(|| format!("loading scenarios from {}", args.dir.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let config = match args.start {
        Some(start_date) => ProjectionConfig::starting(start_date),
        None => ProjectionConfig::default(),
    };
    let runner = ScenarioRunner::new(config);

    let proj_start = Instant::now();
    let results = runner.run_scenarios(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    for (name, result) in &results {
        let summary = result.summary();
        writer.serialize(SummaryRow {
            scenario: name,
            months: summary.total_months,
            final_net_worth: summary.final_net_worth,
            final_real_net_worth: summary.final_real_net_worth,
            peak_net_worth: summary.peak_net_worth,
            peak_date: summary.peak_date,
            total_contributions: summary.total_contributions,
            total_returns: summary.total_returns,
            depletion_date: summary.depletion_date,
        })?;

        match summary.depletion_date {
            Some(date) => println!("  {:<24} runs out {}", name, date),
            None => println!("  {:<24} final ${:.0}", name, summary.final_net_worth),
        }
    }
    writer.flush()?;

    println!("Output written to {}", args.out.display());
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
