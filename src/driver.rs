//! The computer-controlled typist.
//!
//! Each tick the driver reveals one more letter of the AI car's word with a
//! fixed probability, so a word of `n` letters takes `n / p` ticks on average.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::car::Car;
use crate::config::GameConfig;
use crate::words::WordSource;

/// A biased coin.
pub trait Chance {
    /// Returns true with probability `p`.
    fn roll(&mut self, p: f64) -> bool;
}

#[derive(Debug, Clone)]
pub struct RandomChance(StdRng);

impl RandomChance {
    pub const fn new(rng: StdRng) -> Self {
        Self(rng)
    }

    /// Seeded from `config.seed` when present. Offset from the word seed so
    /// the two streams differ.
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed.wrapping_add(1))),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Chance for RandomChance {
    fn roll(&mut self, p: f64) -> bool {
        self.0.gen::<f64>() < p
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Chance for Always {
    fn roll(&mut self, _p: f64) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Chance for Never {
    fn roll(&mut self, _p: f64) -> bool {
        false
    }
}

/// What the driver did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Idle,
    Letter,
    Word,
}

/// Runs one tick of AI typing. A completed word adds `boost` to the car's
/// speed and draws a new word.
pub fn step(
    car: &mut Car,
    chance: &mut dyn Chance,
    words: &mut dyn WordSource,
    p: f64,
    boost: f64,
) -> Step {
    let mut result = Step::Idle;
    if !car.is_word_done() && chance.roll(p) && car.reveal_next() {
        result = Step::Letter;
    }
    if car.is_word_done() {
        car.boost(boost);
        car.assign_new_word(words);
        result = Step::Word;
    }
    result
}
