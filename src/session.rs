//! The session state machine sitting between the host loop and a [`Race`].
//!
//! A session is `Running` while its race is undecided and `Finished` once the
//! race has a winner. A restart from `Finished` swaps in a brand-new race
//! built from the same word and chance sources.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::Action;
use crate::car::Car;
use crate::config::{ConfigError, GameConfig};
use crate::driver::{Chance, RandomChance};
use crate::game::{Event, Outcome, Race, Rules};
use crate::log::RaceLog;
use crate::words::{RandomWords, WordSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Finished,
}

/// Whether the host should keep its loop going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarView {
    pub name: String,
    pub position: f64,
    pub word: String,
    pub typed: String,
}

impl From<&Car> for CarView {
    fn from(car: &Car) -> Self {
        Self {
            name: car.name.clone(),
            position: car.position(),
            word: car.word().to_string(),
            typed: car.typed().to_string(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: CarView,
    pub ai: CarView,
    pub input: String,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
}

pub struct Session {
    rules: Rules,
    words: Box<dyn WordSource>,
    chance: Box<dyn Chance>,
    race: Race,
    phase: Phase,
    input: String,
    log: RaceLog,
    races: Vec<RaceLog>,
}

impl Session {
    pub fn new(rules: Rules, mut words: Box<dyn WordSource>, chance: Box<dyn Chance>) -> Self {
        let race = Race::new(rules, words.as_mut());
        info!(
            player_word = race.player().word(),
            ai_word = race.ai().word(),
            "race started"
        );
        Self {
            rules,
            words,
            chance,
            race,
            phase: Phase::Running,
            input: String::new(),
            log: RaceLog::default(),
            races: Vec::new(),
        }
    }

    /// Random words and AI draws, seeded when `config.seed` is set.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let words = RandomWords::from_config(config)?;
        let chance = RandomChance::from_config(config);
        Ok(Self::new(config.into(), Box::new(words), Box::new(chance)))
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn outcome(&self) -> Option<Outcome> {
        self.race.outcome()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn race(&self) -> &Race {
        &self.race
    }

    /// Direct access to the live race, e.g. to stage positions.
    pub fn race_mut(&mut self) -> &mut Race {
        &mut self.race
    }

    /// Logs of every race that reached a finish.
    pub fn races(&self) -> &[RaceLog] {
        &self.races
    }

    pub fn handle(&mut self, action: Action) -> Flow {
        match (self.phase, action) {
            (_, Action::Quit) => {
                info!(phase = ?self.phase, "quit");
                return Flow::Quit;
            }
            (Phase::Running, edit) if edit.is_edit() => edit.apply_to(&mut self.input),
            (Phase::Finished, Action::Restart) => self.restart(),
            _ => {}
        }
        Flow::Continue
    }

    pub fn tick(&mut self) -> Vec<Event> {
        if self.phase == Phase::Finished {
            return Vec::new();
        }
        let events = self
            .race
            .tick(&mut self.input, self.words.as_mut(), self.chance.as_mut());

        for event in &events {
            match event {
                Event::PlayerWord(word) => debug!(%word, "player finished word"),
                Event::AiWord(word) => debug!(%word, "ai finished word"),
                Event::AiLetter => debug!(typed = self.race.ai().typed(), "ai letter"),
                Event::Finished(outcome) => {
                    info!(
                        winner = outcome.winner(),
                        ticks = self.race.ticks(),
                        "race finished"
                    );
                }
            }
        }
        self.log.record(&self.race, events.clone());

        if self.race.is_over() {
            self.phase = Phase::Finished;
            self.races.push(std::mem::take(&mut self.log));
        }
        events
    }

    fn restart(&mut self) {
        self.race = Race::new(self.rules, self.words.as_mut());
        self.input.clear();
        self.log = RaceLog::default();
        self.phase = Phase::Running;
        info!(
            player_word = self.race.player().word(),
            ai_word = self.race.ai().word(),
            "race restarted"
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.race.player().into(),
            ai: self.race.ai().into(),
            input: self.input.clone(),
            phase: self.phase,
            outcome: self.race.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Always, Never};
    use crate::words::ScriptedWords;

    fn session(words: &[&str], chance: Box<dyn Chance>) -> Session {
        let words = ScriptedWords::new(words.iter().copied()).unwrap();
        Session::new(Rules::from(&GameConfig::default()), Box::new(words), chance)
    }

    fn type_str(session: &mut Session, text: &str) {
        for c in text.chars() {
            assert_eq!(session.handle(Action::Char(c)), Flow::Continue);
        }
    }

    #[test]
    fn typing_a_word_boosts_and_clears_input() {
        let mut session = session(&["cat"], Box::new(Never));
        type_str(&mut session, "cat");
        assert_eq!(session.input(), "cat");

        let events = session.tick();
        assert_eq!(events, vec![Event::PlayerWord("cat".into())]);
        assert_eq!(session.race().player().word(), "cat");
        assert_eq!(session.race().player().typed(), "");
        assert_eq!(session.input(), "");
        // boosted by 2.0, moved once, then dragged
        assert_eq!(session.race().player().position(), 102.0);
        assert!((session.race().player().speed() - 1.9).abs() < 1e-12);
    }

    #[test]
    fn uppercase_keys_still_match() {
        let mut session = session(&["cat"], Box::new(Never));
        type_str(&mut session, "CA");
        session.tick();
        assert_eq!(session.input(), "ca");
        assert_eq!(session.race().player().typed(), "ca");
    }

    #[test]
    fn backspace_shortens_the_prefix() {
        let mut session = session(&["race"], Box::new(Never));
        type_str(&mut session, "rac");
        session.tick();
        assert_eq!(session.race().player().typed(), "rac");

        session.handle(Action::Backspace);
        session.tick();
        assert_eq!(session.race().player().typed(), "ra");
    }

    #[test]
    fn finishing_moves_to_finished() {
        let mut session = session(&["car"], Box::new(Never));
        session.race_mut().player_mut().set_position(740.0);
        session.tick();
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.outcome(), Some(Outcome::PlayerWon));
        assert_eq!(session.races().len(), 1);
        assert_eq!(session.races()[0].winner, Some(Outcome::PlayerWon));
    }

    #[test]
    fn finished_session_ignores_typing_and_ticks() {
        let mut session = session(&["car"], Box::new(Always));
        session.race_mut().ai_mut().set_position(740.0);
        session.tick();
        assert_eq!(session.outcome(), Some(Outcome::AiWon));

        let before = session.snapshot();
        type_str(&mut session, "car");
        assert!(session.tick().is_empty());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn restart_only_applies_when_finished() {
        let mut session = session(&["car"], Box::new(Never));
        type_str(&mut session, "ca");
        session.handle(Action::Restart);
        assert_eq!(session.input(), "ca");
        assert_eq!(session.phase(), Phase::Running);
    }

    #[test]
    fn restart_resets_both_cars() {
        let mut session = session(&["car", "lap"], Box::new(Always));
        session.race_mut().player_mut().set_speed(4.0);
        session.race_mut().ai_mut().set_position(739.0);
        session.race_mut().ai_mut().set_speed(5.0);
        session.tick();
        assert_eq!(session.phase(), Phase::Finished);

        session.handle(Action::Restart);
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.outcome(), None);
        assert_eq!(session.input(), "");
        for car in [session.race().player(), session.race().ai()] {
            assert_eq!(car.position(), 100.0);
            assert_eq!(car.speed(), 0.0);
            assert_eq!(car.typed(), "");
        }
        assert_eq!(session.race().ticks(), 0);
    }

    #[test]
    fn quit_works_in_every_phase() {
        let mut session = session(&["car"], Box::new(Never));
        assert_eq!(session.handle(Action::Quit), Flow::Quit);
        session.race_mut().player_mut().set_position(800.0);
        session.tick();
        assert_eq!(session.handle(Action::Quit), Flow::Quit);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut session = session(&["speed", "win"], Box::new(Never));
        type_str(&mut session, "spx");
        session.tick();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.player.word, "speed");
        assert_eq!(snapshot.player.typed, "sp");
        assert_eq!(snapshot.ai.word, "win");
        assert_eq!(snapshot.input, "spx");
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.outcome, None);
    }

    #[test]
    fn seeded_config_builds_a_session() {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let session = Session::from_config(&config).unwrap();
        assert!(config.words.iter().any(|w| w == session.race().player().word()));
    }
}
