//! Holdfast CLI - property-based test runner
//!
//! Usage: holdfast <COMMAND>
//!
//! Commands:
//!   run    Run the registered property tests
//!   list   List registered property tests

use anyhow::Result;
use clap::{Parser, Subcommand};

use holdfast::{SuiteReport, TestStatus};

/// Holdfast - property-based test runner
#[derive(Parser, Debug)]
#[command(name = "holdfast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine-readable output (one JSON event per line)
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the registered property tests
    Run {
        /// Run seed; random when omitted (printed for reproduction)
        #[arg(long)]
        seed: Option<u64>,

        /// Override the per-test sample count
        #[arg(long)]
        cases: Option<usize>,

        /// Only run tests whose names contain this substring
        #[arg(long)]
        filter: Option<String>,
    },

    /// List registered property tests
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { seed, cases, filter } => cmd_run(seed, cases, filter.as_deref(), cli.json),
        Commands::List => cmd_list(cli.json),
    }
}

fn cmd_run(seed: Option<u64>, cases: Option<usize>, filter: Option<&str>, json: bool) -> Result<()> {
    let suite = holdfast::demo_suite()?;
    let seed = seed.unwrap_or_else(rand::random);

    if !json {
        println!("🧪 Holdfast Run");
        println!("Seed: {seed}");
        if let Some(f) = filter {
            println!("Filter: {f}");
        }
        println!();
    }

    let report = suite.run_filtered(seed, filter, cases);

    if json {
        for outcome in &report.outcomes {
            println!("{}", serde_json::to_string(outcome)?);
        }
        let summary = serde_json::json!({
            "event": "summary",
            "seed": report.seed,
            "passed": report.passes(),
            "failed": report.failures(),
            "expected_failures": report.expected_failures(),
            "anomalies": report.anomalies(),
            "success": report.is_success(),
        });
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_report(&report);
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &SuiteReport) {
    for outcome in &report.outcomes {
        match &outcome.status {
            TestStatus::Passed { cases } => {
                println!("  ✓ {} ({} cases)", outcome.name, cases);
            }
            TestStatus::Failed { counterexample, message, notes, case, shrink_steps } => {
                println!("  ✗ {}", outcome.name);
                println!("      counterexample: {counterexample}");
                println!("      message: {message}");
                println!("      found at case {case}, after {shrink_steps} shrink steps");
                for note in notes {
                    println!("      note: {note}");
                }
            }
            TestStatus::ExpectedFailure { reason, counterexample, notes } => {
                println!("  ⚠ {} - failed as expected ({reason})", outcome.name);
                println!("      counterexample: {counterexample}");
                for note in notes {
                    println!("      note: {note}");
                }
            }
            TestStatus::UnexpectedPass { reason } => {
                println!(
                    "  ⚠ {} - ANOMALY: expected failure ({reason}) but passed",
                    outcome.name
                );
            }
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} expected failures, {} failed, {} anomalies",
        report.passes(),
        report.expected_failures(),
        report.failures(),
        report.anomalies()
    );
    println!();
    if !report.is_success() {
        println!("🔴 Properties falsified. Re-run with --seed {} to reproduce.", report.seed);
    } else if report.anomalies() > 0 {
        println!("🟡 All properties held, but expected failures passed.");
    } else {
        println!("🟢 All properties held.");
    }
}

fn cmd_list(json: bool) -> Result<()> {
    let suite = holdfast::demo_suite()?;

    if json {
        for test in suite.tests() {
            let output = serde_json::json!({
                "event": "test",
                "name": test.name(),
                "cases": test.case_count(),
                "expected_failure": test.expected_failure(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        println!("Registered property tests ({}):\n", suite.tests().len());
        for test in suite.tests() {
            println!("┌─ {}", test.name());
            println!("│  Cases: {}", test.case_count());
            if let Some(reason) = test.expected_failure() {
                println!("│  Expected failure: {reason}");
            }
            println!("└─");
        }
    }

    Ok(())
}
