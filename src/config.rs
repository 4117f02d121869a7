use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const TRACK_WIDTH: f64 = 800.0;
const CAR_WIDTH: f64 = 60.0;
const LANE_ORIGIN: f64 = 100.0;

const PLAYER_BOOST: f64 = 2.0;
const AI_BOOST: f64 = 0.5;
const DRAG: f64 = 0.95;
const AI_REVEAL_CHANCE: f64 = 0.02;
const TICK_RATE: u32 = 60;

const WORDS: [&str; 10] = [
    "speed", "race", "typing", "keyboard", "python", "code", "fast", "win", "car", "lap",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("word list is empty")]
    NoWords,
    #[error("word {0:?} must be non-empty lowercase ascii letters")]
    BadWord(String),
    #[error("ai reveal chance {0} is outside [0, 1]")]
    BadChance(f64),
    #[error("drag {0} is outside [0, 1)")]
    BadDrag(f64),
    #[error("car width {car} does not fit on a track of width {track}")]
    BadTrack { track: f64, car: f64 },
    #[error("tick rate must be positive")]
    BadTickRate,
}

/// Every tunable of a race. The physics constants assume `tick_rate` ticks
/// per second and must be re-derived if it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub track_width: f64,
    pub car_width: f64,
    pub lane_origin: f64,
    pub player_boost: f64,
    pub ai_boost: f64,
    pub drag: f64,
    pub ai_reveal_chance: f64,
    pub tick_rate: u32,
    pub words: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_width: TRACK_WIDTH,
            car_width: CAR_WIDTH,
            lane_origin: LANE_ORIGIN,
            player_boost: PLAYER_BOOST,
            ai_boost: AI_BOOST,
            drag: DRAG,
            ai_reveal_chance: AI_REVEAL_CHANCE,
            tick_rate: TICK_RATE,
            words: WORDS.iter().map(ToString::to_string).collect(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        if let Some(word) = self
            .words
            .iter()
            .find(|w| w.is_empty() || !w.bytes().all(|b| b.is_ascii_lowercase()))
        {
            return Err(ConfigError::BadWord(word.clone()));
        }
        if !(0.0..=1.0).contains(&self.ai_reveal_chance) {
            return Err(ConfigError::BadChance(self.ai_reveal_chance));
        }
        if !(0.0..1.0).contains(&self.drag) {
            return Err(ConfigError::BadDrag(self.drag));
        }
        if self.car_width <= 0.0 || self.track_width <= 0.0 || self.car_width >= self.track_width {
            return Err(ConfigError::BadTrack {
                track: self.track_width,
                car: self.car_width,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::BadTickRate);
        }
        Ok(())
    }

    /// Offset at which a car's front bumper crosses the line.
    pub fn finish_line(&self) -> f64 {
        self.track_width - self.car_width
    }
}
