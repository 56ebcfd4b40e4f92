//! Game rules - die shape, bust face, target score and round cap

use crate::dice::DEFAULT_FACES;

/// Face that busts a turn on a standard die
pub const DEFAULT_BUST_FACE: u32 = 1;

/// Cumulative score that wins a game
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// Rounds played before a game is abandoned without a winner
pub const DEFAULT_MAX_ROUNDS: u32 = 1 << 10;

/// Invalid rule parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("die needs at least 2 faces, got {0}")]
    TooFewFaces(u32),

    #[error("bust face {bust_face} is not on a {faces}-sided die")]
    BustFaceOutOfRange { bust_face: u32, faces: u32 },

    #[error("target score must be positive")]
    ZeroTarget,

    #[error("max rounds must be positive")]
    ZeroMaxRounds,
}

/// Parameters of a single game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRules {
    /// Faces on the die
    pub faces: u32,
    /// Face that wipes the turn total and ends the turn
    pub bust_face: u32,
    /// Cumulative score that wins
    pub target_score: u32,
    /// Round cap
    pub max_rounds: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            faces: DEFAULT_FACES,
            bust_face: DEFAULT_BUST_FACE,
            target_score: DEFAULT_TARGET_SCORE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameRules {
    /// Set the target score
    pub fn with_target(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Set the round cap
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Check that the rules describe a playable game
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.faces < 2 {
            return Err(RulesError::TooFewFaces(self.faces));
        }
        if !(1..=self.faces).contains(&self.bust_face) {
            return Err(RulesError::BustFaceOutOfRange {
                bust_face: self.bust_face,
                faces: self.faces,
            });
        }
        if self.target_score == 0 {
            return Err(RulesError::ZeroTarget);
        }
        if self.max_rounds == 0 {
            return Err(RulesError::ZeroMaxRounds);
        }
        Ok(())
    }
}
