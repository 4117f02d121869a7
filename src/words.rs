use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{ConfigError, GameConfig};

/// Supplies the next target word for a car.
pub trait WordSource {
    fn next_word(&mut self) -> String;
}

/// Uniform picks from a fixed list. Repeats are allowed.
#[derive(Debug, Clone)]
pub struct RandomWords {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWords {
    pub fn new(words: Vec<String>, rng: StdRng) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        Ok(Self { words, rng })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config.words.clone(), rng)
    }
}

impl WordSource for RandomWords {
    fn next_word(&mut self) -> String {
        // non-empty is checked in `new`
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

/// Hands out a fixed sequence, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedWords {
    words: Vec<String>,
    next: usize,
}

impl ScriptedWords {
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        Ok(Self { words, next: 0 })
    }
}

impl WordSource for ScriptedWords {
    fn next_word(&mut self) -> String {
        let word = self.words[self.next % self.words.len()].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}
