//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use pig_core::GameRules;

/// Games played per tournament by default
pub const DEFAULT_TRIALS: u64 = 1 << 20;

/// Tournament configuration
#[derive(Clone, Debug)]
pub struct TournamentConfig {
    /// Rules every game is played under
    pub rules: GameRules,
    /// Number of independent games
    pub trials: u64,
    /// Whether to run games in parallel
    pub parallel: bool,
    /// Base random seed (None = random)
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            trials: DEFAULT_TRIALS,
            parallel: false,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Create config with the given number of trials
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    /// Set game rules
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable parallel execution
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
