//! Turn resolution

use serde::Serialize;

use crate::dice::{Dice, RandomSource};
use crate::player::PlayerId;
use crate::strategy::{RollPlan, Strategy};

/// Result of one player's turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// Player who took the turn
    pub player: PlayerId,
    /// Points banked this turn (zero after a bust)
    pub points: u32,
    /// Rolls that did not bust
    pub scoring_rolls: u32,
    /// Busting rolls; a bust ends the turn so this is 0 or 1
    pub busts: u32,
}

impl Turn {
    /// A turn with no rolls
    pub fn empty(player: PlayerId) -> Self {
        Self {
            player,
            points: 0,
            scoring_rolls: 0,
            busts: 0,
        }
    }

    pub fn is_bust(&self) -> bool {
        self.busts > 0
    }

    /// Total dice rolled, busting roll included
    pub fn rolls(&self) -> u32 {
        self.scoring_rolls + self.busts
    }

    /// Roll once. Returns false if the roll busted.
    fn roll<S: RandomSource>(&mut self, dice: &mut Dice<'_, S>, bust_face: u32) -> bool {
        let value = dice.roll();
        if value == bust_face {
            self.points = 0;
            self.busts += 1;
            return false;
        }
        self.points += value;
        self.scoring_rolls += 1;
        true
    }
}

/// Play one turn for `player` following `strategy`.
///
/// A roll of `bust_face` discards everything accumulated this turn and ends it.
pub fn play_turn<S: RandomSource>(
    player: PlayerId,
    strategy: &Strategy,
    dice: &mut Dice<'_, S>,
    bust_face: u32,
) -> Turn {
    let mut turn = Turn::empty(player);

    match strategy.plan(dice) {
        RollPlan::Exactly(n) => {
            for _ in 0..n {
                if !turn.roll(dice, bust_face) {
                    break;
                }
            }
        }
        RollPlan::UntilCap(cap) => {
            // Always at least one roll, even when the cap is already met
            while turn.roll(dice, bust_face) {
                if i64::from(turn.points) >= cap {
                    break;
                }
            }
        }
        RollPlan::Nothing => {}
    }

    turn
}
