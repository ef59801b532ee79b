//! swiss-sim CLI
//!
//! Run many simulated Swiss tournaments and report how often the final
//! standings match the players' true strength order.

use anyhow::{Context, Result};
use clap::Parser;
use tournament::{BatchRunner, CliArgs, SimulationConfig, render_rounds};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = SimulationConfig::from_args(&args).context("Failed to load configuration")?;
    let runner = BatchRunner::new(config);

    let results = runner
        .run_with(|simulation, outcome| {
            if args.show_rounds {
                println!("=== Simulation {} ===", simulation + 1);
                print!("{}", render_rounds(outcome));
                println!();
            }
        })
        .context("Simulation aborted")?;

    if args.json {
        println!("{}", results.to_json().context("Failed to serialize results")?);
    } else if args.verbose {
        results.print_report();
    } else {
        println!("{}", results.summary_line());
    }

    Ok(())
}
