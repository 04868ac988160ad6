//! DuraScan CLI.
//!
//! Simulated AI durability assessment for bottles.

use std::io;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use durascan::AssessmentConfig;

mod flow;
mod ui;

use flow::{Assessment, ThreadPacer};

#[derive(Parser)]
#[command(name = "durascan", version)]
#[command(about = "Simulated AI durability assessment for bottles")]
struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut assessment = Assessment::new(
        io::stdin().lock(),
        io::stdout().lock(),
        ThreadPacer,
        AssessmentConfig::default(),
    );
    assessment.run()?;

    Ok(())
}

/// Logs go to stderr so they never tear the progress line on stdout.
/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
