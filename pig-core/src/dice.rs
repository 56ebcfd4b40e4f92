//! Dice and the randomness they draw from

use rand::{Rng, RngCore};

/// Faces on a standard die
pub const DEFAULT_FACES: u32 = 6;

// ============================================================================
// RANDOMNESS
// ============================================================================

/// Provider of uniformly distributed integers.
///
/// Every `rand` generator is a source. Tests plug in [`ScriptedSource`] to
/// rig the dice.
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// Deterministic source that replays a fixed sequence of values, cycling
/// when it runs out.
///
/// Values are clamped into the requested range, so a script of `[6]` asked
/// for a number in `1..=3` yields 3.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u32>,
    pos: usize,
    draws: u64,
}

impl ScriptedSource {
    /// Create a source replaying `values`
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self {
            values,
            pos: 0,
            draws: 0,
        }
    }

    /// Source that always yields `value`
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        self.draws += 1;
        value.clamp(low, high)
    }
}

// ============================================================================
// DICE
// ============================================================================

/// A die with `faces` sides numbered from 1
pub struct Dice<'a, S: RandomSource> {
    faces: u32,
    source: &'a mut S,
}

impl<'a, S: RandomSource> Dice<'a, S> {
    /// Create a die backed by `source`
    pub fn new(faces: u32, source: &'a mut S) -> Self {
        Self { faces, source }
    }

    /// Roll once, returning a value in `1..=faces`
    pub fn roll(&mut self) -> u32 {
        self.source.next_in_range(1, self.faces)
    }

    /// Draw a value in `1..=max` from the same source (used for random roll counts)
    pub fn draw_up_to(&mut self, max: u32) -> u32 {
        self.source.next_in_range(1, max)
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }
}
