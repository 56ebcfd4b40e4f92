//! Player strategies and the rolling plans they resolve to

use crate::dice::{Dice, RandomSource};

// ============================================================================
// STRATEGY TAGS
// ============================================================================

pub const FIXED_ROLLS: &str = "fixedRolls";
pub const RANDOM_ROLLS: &str = "randomRolls";
pub const CAP_AT: &str = "capAt";

/// Error building a strategy from its tag and parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("unknown strategy: {0:?}")]
    Unknown(String),

    #[error("strategy {tag} needs rolls >= 1, got {rolls}")]
    InvalidRolls { tag: &'static str, rolls: i64 },
}

/// How a player decides how many dice to roll in a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Roll exactly `rolls` times unless a bust comes first
    FixedRolls { rolls: u32 },
    /// Draw a roll count from `1..=rolls` at turn start, then roll that many
    RandomRolls { rolls: u32 },
    /// Keep rolling until the turn total reaches `cap`
    CapAt { cap: i64 },
    /// Never rolls; stands in for unrecognized tags when loading leniently
    Idle,
}

/// Rolling procedure for one turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollPlan {
    /// Roll this many times
    Exactly(u32),
    /// Roll until the turn total is at least this value
    UntilCap(i64),
    /// Take no rolls at all
    Nothing,
}

impl Strategy {
    /// Build a strategy from its configured tag and parameters
    pub fn from_tag(tag: &str, rolls: i64, cap: i64) -> Result<Self, StrategyError> {
        match tag {
            FIXED_ROLLS => Ok(Strategy::FixedRolls {
                rolls: positive_rolls(FIXED_ROLLS, rolls)?,
            }),
            RANDOM_ROLLS => Ok(Strategy::RandomRolls {
                rolls: positive_rolls(RANDOM_ROLLS, rolls)?,
            }),
            CAP_AT => Ok(Strategy::CapAt { cap }),
            other => Err(StrategyError::Unknown(other.to_string())),
        }
    }

    /// Configuration tag for this strategy
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::FixedRolls { .. } => FIXED_ROLLS,
            Strategy::RandomRolls { .. } => RANDOM_ROLLS,
            Strategy::CapAt { .. } => CAP_AT,
            Strategy::Idle => "idle",
        }
    }

    /// Resolve the rolling plan for a fresh turn.
    ///
    /// `RandomRolls` consumes one draw from the die's source here, before any
    /// dice are rolled.
    pub fn plan<S: RandomSource>(&self, dice: &mut Dice<'_, S>) -> RollPlan {
        match *self {
            Strategy::FixedRolls { rolls } => RollPlan::Exactly(rolls),
            Strategy::RandomRolls { rolls } => RollPlan::Exactly(dice.draw_up_to(rolls)),
            Strategy::CapAt { cap } => RollPlan::UntilCap(cap),
            Strategy::Idle => RollPlan::Nothing,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::FixedRolls { rolls } | Strategy::RandomRolls { rolls } => {
                write!(f, "{}({})", self.tag(), rolls)
            }
            Strategy::CapAt { cap } => write!(f, "{}({})", self.tag(), cap),
            Strategy::Idle => write!(f, "{}", self.tag()),
        }
    }
}

fn positive_rolls(tag: &'static str, rolls: i64) -> Result<u32, StrategyError> {
    match u32::try_from(rolls) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(StrategyError::InvalidRolls { tag, rolls }),
    }
}
