//! PIG Core - Dice game engine
//!
//! This crate provides the core game logic for PIG:
//! - Dice with an injectable randomness source
//! - Player strategies and the rolling plan each one produces
//! - Turn resolution (scoring rolls, busts)
//! - Game loop with round cap and first-crosser-wins termination
//! - Roster loading and validation

pub mod dice;
pub mod strategy;
pub mod player;
pub mod rules;
pub mod turn;
pub mod game;

// Re-exports for convenient access
pub use dice::{Dice, RandomSource, ScriptedSource, DEFAULT_FACES};
pub use strategy::{RollPlan, Strategy, StrategyError};
pub use player::{LoadMode, Player, PlayerId, PlayerRecord, Roster, RosterError};
pub use rules::{GameRules, RulesError};
pub use turn::{play_turn, Turn};
pub use game::{run_game, Game, GameResult, GameStatus};
