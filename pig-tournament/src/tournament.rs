//! Tournament execution - many independent games, one win tally
//!
//! Level 1 - Orchestration and Level 2 - Phases

use std::time::Instant;

use pig_core::{PlayerId, RandomSource, Roster, RulesError};
use rayon::prelude::*;

use crate::config::TournamentConfig;
use crate::game_runner::{trial_rng, GameOutcome, GameRunner};

/// Standing of a player in the tournament
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    /// Player position in the roster
    pub id: PlayerId,
    /// Player name
    pub name: String,
    /// Games won
    pub wins: u64,
    /// Wins over all trials played (no-winner trials included)
    pub win_rate: f64,
}

/// Result of a tournament
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentResult {
    /// Player names in roster order
    pub names: Vec<String>,
    /// Wins per player, indexed by `PlayerId`
    pub wins: Vec<u64>,
    /// Trials that hit the round cap without a winner
    pub no_winner: u64,
    /// Trials played
    pub trials: u64,
    /// Rounds played across all trials
    pub total_rounds: u64,
    /// Base seed the per-trial streams were derived from (None when the
    /// caller supplied its own sources)
    pub seed: Option<u64>,
}

impl TournamentResult {
    /// Wins for a player (0 for ids outside the roster)
    pub fn wins_for(&self, id: PlayerId) -> u64 {
        self.wins.get(id.index()).copied().unwrap_or(0)
    }

    /// Average game length in rounds
    pub fn avg_rounds(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.trials as f64
        }
    }

    /// All players sorted by wins (descending), roster order on ties
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .names
            .iter()
            .zip(&self.wins)
            .enumerate()
            .map(|(i, (name, &wins))| Standing {
                id: PlayerId(i),
                name: name.clone(),
                wins,
                win_rate: if self.trials == 0 {
                    0.0
                } else {
                    wins as f64 / self.trials as f64
                },
            })
            .collect();

        // Stable sort keeps roster order among equal win counts
        standings.sort_by(|a, b| b.wins.cmp(&a.wins));
        standings
    }

    /// Standings of players who won at least once
    pub fn winners(&self) -> Vec<Standing> {
        self.standings().into_iter().filter(|s| s.wins > 0).collect()
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run a tournament (Level 1 orchestration)
///
/// # Arguments
/// * `roster` - Players, in turn order
/// * `config` - Tournament configuration
///
/// # Returns
/// Win tally over `config.trials` independent games, or the rule violation
/// if `config.rules` is not playable
pub fn run_tournament(
    roster: &Roster,
    config: &TournamentConfig,
) -> Result<TournamentResult, RulesError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    run_trials(roster, config, Some(seed), |trial| trial_rng(seed, trial))
}

/// Run a tournament drawing each trial's dice from `source_for_trial(trial)`.
///
/// Used to rig the dice in tests; any `rand` generator works as well.
/// `config.seed` is ignored and the result carries no seed.
pub fn run_tournament_with<S, F>(
    roster: &Roster,
    config: &TournamentConfig,
    source_for_trial: F,
) -> Result<TournamentResult, RulesError>
where
    S: RandomSource,
    F: Fn(u64) -> S + Sync,
{
    run_trials(roster, config, None, source_for_trial)
}

fn run_trials<S, F>(
    roster: &Roster,
    config: &TournamentConfig,
    seed: Option<u64>,
    source_for_trial: F,
) -> Result<TournamentResult, RulesError>
where
    S: RandomSource,
    F: Fn(u64) -> S + Sync,
{
    config.rules.validate()?;

    tracing::info!(
        "Starting tournament: {} players, {} trials (seed={:?}, parallel={})",
        roster.len(),
        config.trials,
        seed,
        config.parallel
    );
    let start = Instant::now();

    let runner = GameRunner::new(config.rules);
    let play = |trial: u64| {
        let mut source = source_for_trial(trial);
        runner.play_with_source(roster, &mut source)
    };

    let tally = if config.parallel {
        run_trials_parallel(roster.len(), config.trials, play)
    } else {
        run_trials_sequential(roster.len(), config.trials, play)
    };

    tracing::info!(
        "Tournament finished in {:.2?}: {} trials, {} without a winner",
        start.elapsed(),
        tally.trials,
        tally.no_winner
    );

    Ok(TournamentResult {
        names: roster.players().iter().map(|p| p.name.clone()).collect(),
        wins: tally.wins,
        no_winner: tally.no_winner,
        trials: tally.trials,
        total_rounds: tally.total_rounds,
        seed,
    })
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Play every trial on the current thread (Level 2 phase)
fn run_trials_sequential<F>(num_players: usize, trials: u64, play: F) -> Tally
where
    F: Fn(u64) -> GameOutcome,
{
    let mut tally = Tally::new(num_players);
    for trial in 0..trials {
        tally.record(&play(trial));
    }
    tally
}

/// Play trials across the rayon pool (Level 2 phase)
fn run_trials_parallel<F>(num_players: usize, trials: u64, play: F) -> Tally
where
    F: Fn(u64) -> GameOutcome + Sync,
{
    (0..trials)
        .into_par_iter()
        .fold(
            || Tally::new(num_players),
            |mut tally, trial| {
                tally.record(&play(trial));
                tally
            },
        )
        .reduce(|| Tally::new(num_players), Tally::merge)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Running totals over a batch of trials
#[derive(Clone, Debug)]
struct Tally {
    wins: Vec<u64>,
    no_winner: u64,
    trials: u64,
    total_rounds: u64,
}

impl Tally {
    fn new(num_players: usize) -> Self {
        Self {
            wins: vec![0; num_players],
            no_winner: 0,
            trials: 0,
            total_rounds: 0,
        }
    }

    fn record(&mut self, outcome: &GameOutcome) {
        self.trials += 1;
        self.total_rounds += u64::from(outcome.rounds);
        match outcome.winner() {
            Some(id) => self.wins[id.index()] += 1,
            None => self.no_winner += 1,
        }
    }

    fn merge(mut self, other: Tally) -> Tally {
        for (mine, theirs) in self.wins.iter_mut().zip(other.wins) {
            *mine += theirs;
        }
        self.no_winner += other.no_winner;
        self.trials += other.trials;
        self.total_rounds += other.total_rounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pig_core::{GameResult, GameRules, Player, ScriptedSource, Strategy};

    fn roster(players: &[(&str, Strategy)]) -> Roster {
        Roster::new(
            players
                .iter()
                .map(|(name, strategy)| Player::new(*name, *strategy))
                .collect(),
        )
    }

    #[test]
    fn test_rigged_dice_single_winner() {
        let roster = roster(&[
            ("A", Strategy::FixedRolls { rolls: 1 }),
            ("B", Strategy::FixedRolls { rolls: 1 }),
        ]);
        let config = TournamentConfig::new(200);

        let result = run_tournament_with(&roster, &config, |_| ScriptedSource::constant(6)).unwrap();

        assert_eq!(result.wins, vec![200, 0]);
        assert_eq!(result.no_winner, 0);
        assert_eq!(result.trials, 200);
        assert_eq!(result.avg_rounds(), 17.0);

        let winners = result.winners();
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].name, "A");
        assert_eq!(winners[0].wins, 200);
        assert_eq!(winners[0].win_rate, 1.0);
    }

    #[test]
    fn test_rigged_busts_credit_nobody() {
        let roster = roster(&[
            ("A", Strategy::CapAt { cap: 20 }),
            ("B", Strategy::RandomRolls { rolls: 4 }),
        ]);
        let config = TournamentConfig::new(10)
            .with_rules(GameRules::default().with_max_rounds(32));

        let result = run_tournament_with(&roster, &config, |_| ScriptedSource::constant(1)).unwrap();

        assert_eq!(result.wins, vec![0, 0]);
        assert_eq!(result.no_winner, 10);
        assert_eq!(result.total_rounds, 320);
        assert!(result.winners().is_empty());
    }

    #[test]
    fn test_zero_trials() {
        let roster = roster(&[("A", Strategy::FixedRolls { rolls: 1 })]);
        let result = run_tournament(&roster, &TournamentConfig::new(0).with_seed(1)).unwrap();
        assert_eq!(result.trials, 0);
        assert_eq!(result.wins, vec![0]);
        assert_eq!(result.avg_rounds(), 0.0);
        assert_eq!(result.standings()[0].win_rate, 0.0);
    }

    #[test]
    fn test_every_trial_accounted_for() {
        let roster = roster(&[
            ("A", Strategy::FixedRolls { rolls: 3 }),
            ("B", Strategy::CapAt { cap: 20 }),
            ("C", Strategy::RandomRolls { rolls: 6 }),
        ]);
        let config = TournamentConfig::new(500).with_seed(2024);
        let result = run_tournament(&roster, &config).unwrap();

        assert_eq!(result.seed, Some(2024));
        assert_eq!(result.wins.iter().sum::<u64>() + result.no_winner, 500);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let roster = roster(&[
            ("A", Strategy::FixedRolls { rolls: 2 }),
            ("B", Strategy::CapAt { cap: 15 }),
            ("C", Strategy::RandomRolls { rolls: 5 }),
        ]);
        let sequential = TournamentConfig::new(2_000).with_seed(99);
        let parallel = sequential.clone().with_parallel(true);

        assert_eq!(
            run_tournament(&roster, &sequential).unwrap(),
            run_tournament(&roster, &parallel).unwrap()
        );
    }

    #[test]
    fn test_standings_sorted_with_roster_tiebreak() {
        let result = TournamentResult {
            names: vec!["A".into(), "B".into(), "C".into()],
            wins: vec![5, 9, 5],
            no_winner: 1,
            trials: 20,
            total_rounds: 400,
            seed: Some(0),
        };
        let names: Vec<String> = result.standings().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(result.wins_for(PlayerId(1)), 9);
        assert_eq!(result.wins_for(PlayerId(7)), 0);
        assert_eq!(result.avg_rounds(), 20.0);
    }

    #[test]
    fn test_unplayable_rules_rejected_before_any_trial() {
        let roster = roster(&[("A", Strategy::FixedRolls { rolls: 1 })]);
        let config = TournamentConfig::new(10)
            .with_seed(1)
            .with_rules(GameRules { faces: 0, ..Default::default() });

        assert_eq!(run_tournament(&roster, &config), Err(RulesError::TooFewFaces(0)));

        let config = config.with_rules(GameRules::default().with_max_rounds(0));
        assert_eq!(
            run_tournament_with(&roster, &config, |_| ScriptedSource::constant(6)),
            Err(RulesError::ZeroMaxRounds)
        );
    }

    #[test]
    fn test_injected_sources_report_no_seed() {
        let roster = roster(&[("A", Strategy::FixedRolls { rolls: 1 })]);
        let config = TournamentConfig::new(3).with_seed(55);

        let result = run_tournament_with(&roster, &config, |_| ScriptedSource::constant(6)).unwrap();
        assert_eq!(result.seed, None);
        assert_eq!(result.wins, vec![3]);
    }

    #[test]
    fn test_tally_merge() {
        let mut a = Tally::new(2);
        a.record(&GameOutcome { result: GameResult::Won(PlayerId(0)), rounds: 10, turns: 19 });
        let mut b = Tally::new(2);
        b.record(&GameOutcome { result: GameResult::Won(PlayerId(1)), rounds: 12, turns: 24 });
        b.record(&GameOutcome { result: GameResult::NoWinner, rounds: 30, turns: 60 });

        let merged = a.merge(b);
        assert_eq!(merged.wins, vec![1, 1]);
        assert_eq!(merged.no_winner, 1);
        assert_eq!(merged.trials, 3);
        assert_eq!(merged.total_rounds, 52);
    }
}
