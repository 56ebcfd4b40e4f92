//! Arguments shared by every command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pig_core::rules::{DEFAULT_BUST_FACE, DEFAULT_MAX_ROUNDS, DEFAULT_TARGET_SCORE};
use pig_core::{GameRules, LoadMode, Roster, DEFAULT_FACES};

/// Where the roster comes from
#[derive(Args, Clone, Debug)]
pub struct RosterArgs {
    /// Roster JSON file
    #[arg(long, value_name = "FILE", default_value = "game.json")]
    pub config_file: PathBuf,

    /// Give players with an unknown strategy an idle turn instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl RosterArgs {
    /// Load and validate the roster
    pub fn load(&self) -> Result<Roster> {
        let mode = if self.lenient {
            LoadMode::Lenient
        } else {
            LoadMode::Strict
        };

        let roster = Roster::load(&self.config_file, mode)
            .with_context(|| format!("Failed to load roster: {}", self.config_file.display()))?;

        for (id, player) in roster.iter() {
            tracing::debug!("Player {}: {} plays {}", id.index(), player.name, player.strategy);
        }

        Ok(roster)
    }
}

/// Game rule overrides
#[derive(Args, Clone, Debug)]
pub struct RulesArgs {
    /// Faces on the die
    #[arg(long, default_value_t = DEFAULT_FACES)]
    pub faces: u32,

    /// Face that busts a turn
    #[arg(long, default_value_t = DEFAULT_BUST_FACE)]
    pub bust_face: u32,

    /// Score needed to win
    #[arg(long, default_value_t = DEFAULT_TARGET_SCORE)]
    pub target: u32,

    /// Maximum rounds per game
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: u32,
}

impl RulesArgs {
    /// Build and validate the rules
    pub fn to_rules(&self) -> Result<GameRules> {
        let rules = GameRules {
            faces: self.faces,
            bust_face: self.bust_face,
            target_score: self.target,
            max_rounds: self.max_rounds,
        };
        rules.validate().context("Invalid game rules")?;
        Ok(rules)
    }
}

/// Create RNG from seed or random
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
