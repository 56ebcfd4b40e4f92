//! Game runner - executes single trials
//!
//! Level 3 - Step-level implementation

use pig_core::{run_game, GameResult, GameRules, PlayerId, RandomSource, Roster};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Outcome of a single game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Final game result
    pub result: GameResult,
    /// Number of rounds played
    pub rounds: u32,
    /// Number of turns taken
    pub turns: usize,
}

impl GameOutcome {
    /// Get winner (None when the round cap was hit)
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.winner()
    }

    /// Check if the game ended without a winner
    pub fn is_no_winner(&self) -> bool {
        self.result == GameResult::NoWinner
    }
}

/// Random stream for trial number `trial`.
///
/// Trial `i` always draws from `ChaCha8Rng::seed_from_u64(base_seed + i)`, so
/// a trial's outcome does not depend on which thread runs it or in what order.
pub(crate) fn trial_rng(base_seed: u64, trial: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(trial))
}

/// Plays single games under fixed rules
#[derive(Clone, Debug)]
pub struct GameRunner {
    rules: GameRules,
}

impl GameRunner {
    /// Create a new game runner
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    /// Play one game drawing dice from `source`
    pub fn play_with_source<S: RandomSource>(&self, roster: &Roster, source: &mut S) -> GameOutcome {
        let (game, result) = run_game(roster, &self.rules, source);
        GameOutcome {
            result,
            rounds: game.rounds(),
            turns: game.turns().len(),
        }
    }
}
