//! Game loop
//!
//! Players take turns in roster order. After each turn the player's banked
//! points are added to their score, and the first player to reach the target
//! wins on the spot. Remaining players in that round do not play.

use crate::dice::{Dice, RandomSource};
use crate::player::{PlayerId, Roster};
use crate::rules::GameRules;
use crate::turn::{play_turn, Turn};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Final outcome of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won(PlayerId),
    /// Round cap reached before anyone hit the target
    NoWinner,
}

impl GameResult {
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameResult::Won(id) => Some(id),
            GameResult::NoWinner => None,
        }
    }
}

/// Lifecycle of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won(PlayerId),
    NoWinner,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::NoWinner)
    }
}

/// One play-through: turn history and running scores
#[derive(Clone, Debug)]
pub struct Game {
    turns: Vec<Turn>,
    scores: Vec<u32>,
    rounds: u32,
    status: GameStatus,
}

impl Game {
    /// Fresh game for `num_players` players
    pub fn new(num_players: usize) -> Self {
        Self {
            turns: Vec::new(),
            scores: vec![0; num_players],
            rounds: 0,
            status: GameStatus::NotStarted,
        }
    }

    /// Turns in the order they were played
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Cumulative score of a player
    pub fn score(&self, id: PlayerId) -> u32 {
        self.scores.get(id.0).copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Rounds started so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Final result, or None while the game is still running
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::Won(id) => Some(GameResult::Won(id)),
            GameStatus::NoWinner => Some(GameResult::NoWinner),
            GameStatus::NotStarted | GameStatus::InProgress => None,
        }
    }

    fn begin_round(&mut self) {
        debug_assert!(!self.is_finished());
        self.status = GameStatus::InProgress;
        self.rounds += 1;
    }

    /// Record a turn and credit its points. Returns true if the player has
    /// now reached `target_score` and won.
    fn record_turn(&mut self, turn: Turn, target_score: u32) -> bool {
        debug_assert_eq!(self.status, GameStatus::InProgress);
        let player = turn.player;
        self.turns.push(turn);

        if turn.points > 0 {
            self.scores[player.0] += turn.points;
        }

        if self.scores[player.0] >= target_score {
            self.status = GameStatus::Won(player);
            return true;
        }
        false
    }

    fn abandon(&mut self) {
        self.status = GameStatus::NoWinner;
    }
}

// ============================================================================
// GAME ENGINE
// ============================================================================

/// Play a full game with `roster` under `rules`, drawing dice from `source`.
///
/// Ends as soon as a player reaches the target score, or with
/// [`GameResult::NoWinner`] after `rules.max_rounds` rounds.
///
/// # Panics
/// Panics if `rules.faces` is 0, or if a player has
/// `Strategy::RandomRolls { rolls: 0 }`. Rosters built by [`Roster::load`]
/// never hold the latter; run [`GameRules::validate`] first when the rules
/// come from outside.
pub fn run_game<S: RandomSource>(
    roster: &Roster,
    rules: &GameRules,
    source: &mut S,
) -> (Game, GameResult) {
    let mut game = Game::new(roster.len());
    let mut dice = Dice::new(rules.faces, source);

    for _ in 0..rules.max_rounds {
        game.begin_round();

        for (id, player) in roster.iter() {
            let turn = play_turn(id, &player.strategy, &mut dice, rules.bust_face);
            tracing::trace!(
                round = game.rounds(),
                player = %player.name,
                points = turn.points,
                rolls = turn.rolls(),
                bust = turn.is_bust(),
                "turn"
            );
            if game.record_turn(turn, rules.target_score) {
                tracing::debug!(round = game.rounds(), winner = %player.name, "game won");
                return (game, GameResult::Won(id));
            }
        }
    }

    game.abandon();
    tracing::debug!(rounds = game.rounds(), "game ended without a winner");
    (game, GameResult::NoWinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedSource;
    use crate::player::Player;
    use crate::strategy::Strategy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed(name: &str, rolls: u32) -> Player {
        Player::new(name, Strategy::FixedRolls { rolls })
    }

    #[test]
    fn test_new_game_not_started() {
        let game = Game::new(2);
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.result(), None);
        assert_eq!(game.scores(), &[0, 0]);
        assert_eq!(game.rounds(), 0);
    }

    #[test]
    fn test_all_sixes_first_player_wins_round_17() {
        let roster = Roster::new(vec![fixed("A", 1), fixed("B", 1)]);
        let mut source = ScriptedSource::constant(6);

        let (game, result) = run_game(&roster, &GameRules::default(), &mut source);

        assert_eq!(result, GameResult::Won(PlayerId(0)));
        assert_eq!(game.winner(), Some(PlayerId(0)));
        assert_eq!(game.rounds(), 17);
        assert_eq!(game.score(PlayerId(0)), 102);
        // B never got a 17th turn
        assert_eq!(game.score(PlayerId(1)), 96);
        assert_eq!(game.turns().len(), 33);
        assert_eq!(game.turns().last().unwrap().player, PlayerId(0));
    }

    #[test]
    fn test_first_crosser_wins_within_round() {
        // Round 1: A banks 6, B banks 2+2+2. Round 2: A rolls 4 and reaches
        // the target; B would have banked 18 but never gets the turn.
        let roster = Roster::new(vec![fixed("A", 1), fixed("B", 3)]);
        let mut source = ScriptedSource::new(vec![6, 2, 2, 2, 4, 6, 6, 6]);
        let rules = GameRules::default().with_target(10);

        let (game, result) = run_game(&roster, &rules, &mut source);

        assert_eq!(result, GameResult::Won(PlayerId(0)));
        assert_eq!(game.rounds(), 2);
        assert_eq!(game.score(PlayerId(0)), 10);
        assert_eq!(game.score(PlayerId(1)), 6);
        assert_eq!(game.turns().len(), 3);
        assert_eq!(source.draws(), 5);
    }

    #[test]
    fn test_all_busts_no_winner_after_cap() {
        let roster = Roster::new(vec![fixed("A", 3), fixed("B", 3)]);
        let mut source = ScriptedSource::constant(1);
        let rules = GameRules::default();

        let (game, result) = run_game(&roster, &rules, &mut source);

        assert_eq!(result, GameResult::NoWinner);
        assert_eq!(game.status(), GameStatus::NoWinner);
        assert_eq!(game.rounds(), rules.max_rounds);
        assert_eq!(game.turns().len(), 2 * rules.max_rounds as usize);
        assert!(game.scores().iter().all(|&s| s == 0));
        assert!(game.turns().iter().all(|t| t.is_bust()));
    }

    #[test]
    fn test_short_cap_no_winner() {
        let roster = Roster::new(vec![fixed("A", 1)]);
        let mut source = ScriptedSource::constant(6);
        let rules = GameRules::default().with_max_rounds(16);

        let (game, result) = run_game(&roster, &rules, &mut source);
        assert_eq!(result, GameResult::NoWinner);
        assert_eq!(game.score(PlayerId(0)), 96);
    }

    #[test]
    #[should_panic]
    fn test_zero_faces_panics() {
        let roster = Roster::new(vec![fixed("A", 1)]);
        let rules = GameRules { faces: 0, ..Default::default() };
        assert!(rules.validate().is_err());

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let _ = run_game(&roster, &rules, &mut rng);
    }

    #[test]
    fn test_empty_roster_no_winner() {
        let roster = Roster::new(vec![]);
        let mut source = ScriptedSource::constant(6);
        let rules = GameRules::default().with_max_rounds(5);

        let (game, result) = run_game(&roster, &rules, &mut source);
        assert_eq!(result, GameResult::NoWinner);
        assert_eq!(game.rounds(), 5);
        assert!(game.turns().is_empty());
    }

    #[test]
    fn test_scores_never_decrease_and_winner_is_last_turn() {
        let roster = Roster::new(vec![
            fixed("A", 2),
            Player::new("B", Strategy::CapAt { cap: 20 }),
            Player::new("C", Strategy::RandomRolls { rolls: 6 }),
        ]);
        let rules = GameRules::default();

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (game, result) = run_game(&roster, &rules, &mut rng);

            let mut running = vec![0u32; roster.len()];
            for turn in game.turns() {
                running[turn.player.0] += turn.points;
            }
            assert_eq!(running, game.scores());

            if let GameResult::Won(id) = result {
                assert_eq!(game.turns().last().unwrap().player, id);
                assert!(game.score(id) >= rules.target_score);
                // Nobody else reached the target
                for (other, _) in roster.iter().filter(|(o, _)| *o != id) {
                    assert!(game.score(other) < rules.target_score);
                }
            }
        }
    }
}
