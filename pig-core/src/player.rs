//! Players and rosters
//!
//! A roster is loaded from a JSON object keyed by arbitrary identifiers:
//!
//! ```json
//! {
//!   "a": { "name": "Alice", "strategy": "fixedRolls", "rolls": 3 },
//!   "b": { "name": "Bob",   "strategy": "capAt",      "cap": 20 }
//! }
//! ```
//!
//! Players take turns in key order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::strategy::{Strategy, StrategyError};

/// Position of a player in roster (turn) order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A player and the strategy they follow
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub strategy: Strategy,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// Raw roster entry as written in the config file
#[derive(Clone, Debug, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub strategy: String,
    #[serde(default)]
    pub rolls: i64,
    #[serde(default)]
    pub cap: i64,
}

/// How to treat unrecognized strategy tags while loading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Reject the roster
    #[default]
    Strict,
    /// Keep the player with the [`Strategy::Idle`] strategy
    Lenient,
}

/// Errors loading a roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("player {player:?}: {source}")]
    Strategy {
        player: String,
        #[source]
        source: StrategyError,
    },

    #[error("roster has no players")]
    Empty,
}

/// Ordered, read-only set of players
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster; turn order follows `players`
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Load from a JSON file
    pub fn load(path: &Path, mode: LoadMode) -> Result<Self, RosterError> {
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, mode)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str, mode: LoadMode) -> Result<Self, RosterError> {
        let records: BTreeMap<String, PlayerRecord> = serde_json::from_str(json)?;
        Self::from_records(records.into_values(), mode)
    }

    /// Validate raw records into a roster
    pub fn from_records(
        records: impl IntoIterator<Item = PlayerRecord>,
        mode: LoadMode,
    ) -> Result<Self, RosterError> {
        let mut players = Vec::new();

        for record in records {
            let strategy = match Strategy::from_tag(&record.strategy, record.rolls, record.cap) {
                Ok(strategy) => strategy,
                Err(StrategyError::Unknown(tag)) if mode == LoadMode::Lenient => {
                    tracing::warn!(
                        "Player {:?} has unknown strategy {:?}; it will never roll",
                        record.name,
                        tag
                    );
                    Strategy::Idle
                }
                Err(source) => {
                    return Err(RosterError::Strategy {
                        player: record.name,
                        source,
                    })
                }
            };
            players.push(Player::new(record.name, strategy));
        }

        if players.is_empty() {
            return Err(RosterError::Empty);
        }

        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    /// Name of a player, or `"?"` for an id outside the roster
    pub fn name(&self, id: PlayerId) -> &str {
        self.get(id).map(|p| p.name.as_str()).unwrap_or("?")
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players with their ids, in turn order
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter().enumerate().map(|(i, p)| (PlayerId(i), p))
    }
}
