//! Passbook CLI - Main entry point
//!
//! Replaces the original fixture's `-f <file>` and `-t '<record>'` modes
//! with proper subcommands. Exit status is non-zero when any scenario
//! fails or any input cannot be parsed.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use passbook_scenario::{load_scenarios, run_scenarios, Scenario, ScenarioReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "passbook")]
#[command(about = "Savings account scenario runner", long_about = None)]
struct Cli {
    /// Print the report as JSON instead of a text summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every scenario in a CSV file (one record per line)
    Run {
        /// Path to the scenario file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Run a single scenario record given inline, e.g.
    /// '10, 20, , , 1, 12.00'
    Check {
        /// The scenario record
        record: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns Ok(true) when every scenario passed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let scenarios = match &cli.command {
        Commands::Run { file } => load_scenarios(file)
            .with_context(|| format!("loading scenarios from {}", file.display()))?,
        Commands::Check { record } => {
            let scenario: Scenario = record
                .parse()
                .with_context(|| format!("parsing scenario record '{record}'"))?;
            vec![scenario]
        }
    };

    if scenarios.is_empty() {
        bail!("no scenarios to run");
    }
    tracing::info!("loaded {} scenario(s)", scenarios.len());

    let report = run_scenarios(&scenarios);
    print_report(&report, cli.json)?;
    Ok(report.all_passed())
}

fn print_report(report: &ScenarioReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{report}");
    for outcome in report.failures() {
        println!("  scenario {} failed: {}", outcome.index, outcome.result);
    }
    Ok(())
}
