use serde::{Deserialize, Serialize};

use crate::car::Car;
use crate::config::GameConfig;
use crate::driver::{self, Chance, Step};
use crate::matcher;
use crate::physics;
use crate::words::WordSource;

pub const PLAYER: &str = "PLAYER";
pub const AI: &str = "AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWon,
    AiWon,
}

impl Outcome {
    pub const fn winner(self) -> &'static str {
        match self {
            Self::PlayerWon => PLAYER,
            Self::AiWon => AI,
        }
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    PlayerWord(String),
    AiLetter,
    AiWord(String),
    Finished(Outcome),
}

/// The numbers a race runs on, lifted out of [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub lane_origin: f64,
    pub finish_line: f64,
    pub player_boost: f64,
    pub ai_boost: f64,
    pub drag: f64,
    pub ai_reveal_chance: f64,
}

impl From<&GameConfig> for Rules {
    fn from(config: &GameConfig) -> Self {
        Self {
            lane_origin: config.lane_origin,
            finish_line: config.finish_line(),
            player_boost: config.player_boost,
            ai_boost: config.ai_boost,
            drag: config.drag,
            ai_reveal_chance: config.ai_reveal_chance,
        }
    }
}

/// One race between the player and the AI.
///
/// Once `outcome` is set the race is frozen: further ticks change nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    rules: Rules,
    ticks: u64,
    player: Car,
    ai: Car,
    outcome: Option<Outcome>,
}

impl Race {
    pub fn new(rules: Rules, words: &mut dyn WordSource) -> Self {
        let player = Car::new(PLAYER, rules.lane_origin, words);
        let ai = Car::new(AI, rules.lane_origin, words);
        Self {
            rules,
            ticks: 0,
            player,
            ai,
            outcome: None,
        }
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub const fn player(&self) -> &Car {
        &self.player
    }

    pub const fn ai(&self) -> &Car {
        &self.ai
    }

    pub fn player_mut(&mut self) -> &mut Car {
        &mut self.player
    }

    pub fn ai_mut(&mut self) -> &mut Car {
        &mut self.ai
    }

    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Advances the race by one tick: player typing, AI typing, movement,
    /// then the finish check. The player is checked first, so a dead heat
    /// goes to the player.
    pub fn tick(
        &mut self,
        input: &mut String,
        words: &mut dyn WordSource,
        chance: &mut dyn Chance,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.ticks += 1;

        let player_word = self.player.word().to_string();
        if matcher::update(&mut self.player, input, words, self.rules.player_boost) {
            events.push(Event::PlayerWord(player_word));
        }

        let ai_word = self.ai.word().to_string();
        match driver::step(
            &mut self.ai,
            chance,
            words,
            self.rules.ai_reveal_chance,
            self.rules.ai_boost,
        ) {
            Step::Idle => {}
            Step::Letter => events.push(Event::AiLetter),
            Step::Word => events.push(Event::AiWord(ai_word)),
        }

        physics::integrate(&mut self.player, self.rules.drag);
        physics::integrate(&mut self.ai, self.rules.drag);

        if self.player.position() >= self.rules.finish_line {
            self.outcome = Some(Outcome::PlayerWon);
        } else if self.ai.position() >= self.rules.finish_line {
            self.outcome = Some(Outcome::AiWon);
        }
        if let Some(outcome) = self.outcome {
            events.push(Event::Finished(outcome));
        }

        events
    }
}
