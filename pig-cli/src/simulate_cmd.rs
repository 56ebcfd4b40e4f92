//! Simulate command - run a tournament and report win tallies
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), report_results()
//! - Level 3: print_text_results(), print_json_results()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use pig_core::Roster;
use pig_tournament::{run_tournament, TournamentConfig, TournamentResult, DEFAULT_TRIALS};

use crate::common::{RosterArgs, RulesArgs};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    #[command(flatten)]
    pub rules: RulesArgs,

    /// Number of games to play
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,

    /// Spread games across all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load the roster and rules (fail before any game is played)
/// 2. Run the tournament
/// 3. Report results
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let roster = args.roster.load()?;
    let config = build_config(&args, seed)?;

    let result = run_tournament(&roster, &config).context("Invalid game rules")?;

    report_results(&roster, &result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build tournament configuration from arguments
fn build_config(args: &SimulateArgs, seed: Option<u64>) -> Result<TournamentConfig> {
    let mut config = TournamentConfig::new(args.trials)
        .with_rules(args.rules.to_rules()?)
        .with_parallel(args.parallel);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Report tournament results
fn report_results(roster: &Roster, result: &TournamentResult, json: bool) -> Result<()> {
    if json {
        print_json_results(roster, result)
    } else {
        print_text_results(result);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

#[derive(Serialize)]
struct JsonStanding {
    name: String,
    strategy: String,
    wins: u64,
    win_rate: f64,
}

#[derive(Serialize)]
struct JsonOutput {
    trials: u64,
    no_winner: u64,
    avg_rounds: f64,
    seed: Option<u64>,
    winners: Vec<JsonStanding>,
}

fn json_output(roster: &Roster, result: &TournamentResult) -> JsonOutput {
    JsonOutput {
        trials: result.trials,
        no_winner: result.no_winner,
        avg_rounds: result.avg_rounds(),
        seed: result.seed,
        winners: result
            .winners()
            .into_iter()
            .map(|s| JsonStanding {
                strategy: roster
                    .get(s.id)
                    .map(|p| p.strategy.to_string())
                    .unwrap_or_default(),
                name: s.name,
                wins: s.wins,
                win_rate: s.win_rate,
            })
            .collect(),
    }
}

/// Print results as JSON
fn print_json_results(roster: &Roster, result: &TournamentResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&json_output(roster, result))?;
    println!("{}", json);
    Ok(())
}

/// Print results as text
fn print_text_results(result: &TournamentResult) {
    for standing in result.winners() {
        println!("{} won {} times", standing.name, standing.wins);
    }

    println!();
    println!("Trials:      {}", result.trials);
    println!(
        "No winner:   {} ({})",
        result.no_winner,
        format_percent(result.no_winner, result.trials)
    );
    println!("Avg rounds:  {:.1}", result.avg_rounds());
    if let Some(seed) = result.seed {
        println!("Seed:        {}", seed);
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn format_percent(count: u64, total: u64) -> String {
    if total == 0 {
        "0.0%".to_string()
    } else {
        format!("{:.1}%", count as f64 / total as f64 * 100.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
