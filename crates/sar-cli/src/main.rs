//! CLI frontend for the maritime search-and-rescue simulation.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sar",
    about = "sar — a maritime search-and-rescue mission simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the mission headless and print a fleet report
    Simulate {
        /// Number of ticks to simulate (default: one full phase cycle)
        #[arg(short, long, default_value = "250")]
        ticks: u64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Show all events (not just summary)
        #[arg(short, long)]
        verbose: bool,

        /// With --verbose, show only the most recent N events
        #[arg(short, long)]
        last: Option<usize>,
    },

    /// Print the world state as JSON after a number of ticks
    State {
        /// Number of ticks to advance before printing
        #[arg(short, long, default_value = "1")]
        ticks: u64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Interface to bind (overrides SAR_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides SAR_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// RNG seed (overrides SAR_SEED)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            seed,
            verbose,
            last,
        } => commands::simulate::run(ticks, seed, verbose, last),
        Commands::State {
            ticks,
            seed,
            pretty,
        } => commands::state::run(ticks, seed, pretty),
        Commands::Serve { host, port, seed } => commands::serve::run(host, port, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
