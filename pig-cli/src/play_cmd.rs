//! Play command - one game with a full turn log
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: report_game()
//! - Level 3: print_text_game(), print_json_game()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pig_core::{run_game, Game, GameResult, Roster, Turn};

use crate::common::{create_rng, RosterArgs, RulesArgs};

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    #[command(flatten)]
    pub rules: RulesArgs,

    /// Output the game as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let roster = args.roster.load()?;
    let rules = args.rules.to_rules()?;
    let mut rng = create_rng(seed);

    let (game, result) = run_game(&roster, &rules, &mut rng);

    tracing::info!("Game over after {} rounds: {:?}", game.rounds(), result);

    report_game(&roster, &game, result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_game(roster: &Roster, game: &Game, result: GameResult, json: bool) -> Result<()> {
    if json {
        print_json_game(roster, game, result)
    } else {
        print_text_game(roster, game, result);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Print results as JSON
fn print_json_game(roster: &Roster, game: &Game, result: GameResult) -> Result<()> {
    #[derive(Serialize)]
    struct JsonScore<'a> {
        name: &'a str,
        score: u32,
    }

    #[derive(Serialize)]
    struct JsonOutput<'a> {
        winner: Option<&'a str>,
        rounds: u32,
        scores: Vec<JsonScore<'a>>,
        turns: &'a [Turn],
    }

    let output = JsonOutput {
        winner: result.winner().map(|id| roster.name(id)),
        rounds: game.rounds(),
        scores: roster
            .iter()
            .map(|(id, p)| JsonScore {
                name: &p.name,
                score: game.score(id),
            })
            .collect(),
        turns: game.turns(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the turn log and final scores
fn print_text_game(roster: &Roster, game: &Game, result: GameResult) {
    let per_round = roster.len().max(1);

    for (i, turn) in game.turns().iter().enumerate() {
        if i % per_round == 0 {
            println!("Round {}", i / per_round + 1);
        }
        println!("  {}", format_turn(roster, turn));
    }

    println!("\nFinal scores:");
    for (id, player) in roster.iter() {
        println!("  {:<16} {}", player.name, game.score(id));
    }

    match result {
        GameResult::Won(id) => println!("\n{} wins in round {}", roster.name(id), game.rounds()),
        GameResult::NoWinner => println!("\nNo winner after {} rounds", game.rounds()),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn format_turn(roster: &Roster, turn: &Turn) -> String {
    let name = roster.name(turn.player);
    if turn.is_bust() {
        format!("{} busted after {} rolls", name, turn.scoring_rolls)
    } else {
        format!("{} banked {} in {} rolls", name, turn.points, turn.scoring_rolls)
    }
}
