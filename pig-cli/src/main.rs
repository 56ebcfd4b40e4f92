//! PIG CLI - Command-line interface
//!
//! Commands:
//! - simulate: Run a tournament and report win tallies
//! - play: Play a single game and print every turn

mod common;
mod play_cmd;
mod simulate_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pig")]
#[command(about = "Monte Carlo simulator for the dice game Pig")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run many games and tally the winners
    Simulate(simulate_cmd::SimulateArgs),
    /// Play a single game and show the turn log
    Play(play_cmd::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
        Commands::Play(args) => play_cmd::run(args, cli.seed),
    }
}
