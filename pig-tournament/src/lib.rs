//! PIG Tournament - Win tallies over many independent games
//!
//! This crate provides tournament infrastructure:
//! - Per-trial game execution with independent random streams
//! - Sequential or parallel trial execution
//! - Win tallies and standings
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_tournament (orchestration)
//! - Level 2: run_trials_sequential, run_trials_parallel (phases)
//! - Level 3: GameRunner::play_with_source, Tally::record (steps)
//! - Level 4: utilities, configuration

mod config;
mod game_runner;
mod tournament;

pub use config::{TournamentConfig, DEFAULT_TRIALS};
pub use game_runner::{GameOutcome, GameRunner};
pub use tournament::{run_tournament, run_tournament_with, Standing, TournamentResult};
