use serde::{Deserialize, Serialize};

use crate::car::Car;
use crate::game::{Event, Outcome, Race};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    pub name: String,
    pub position: f64,
    pub speed: f64,
    pub word: String,
}

impl From<&Car> for CarState {
    fn from(car: &Car) -> Self {
        Self {
            name: car.name.clone(),
            position: car.position(),
            speed: car.speed(),
            word: car.word().to_string(),
        }
    }
}

/// A tick on which something happened, with both cars as they ended it.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    pub tick: u64,
    pub events: Vec<Event>,
    pub cars: Vec<CarState>,
}

impl Log {
    pub fn add_info(&mut self, race: &Race, events: Vec<Event>) {
        self.tick = race.ticks();
        self.events = events;
        self.cars = vec![race.player().into(), race.ai().into()];
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct RaceLog {
    pub logs: Vec<Log>,
    pub winner: Option<Outcome>,
    pub ticks: u64,
}

impl RaceLog {
    /// Quiet ticks are skipped.
    pub fn record(&mut self, race: &Race, events: Vec<Event>) {
        self.ticks = race.ticks();
        self.winner = race.outcome();
        if events.is_empty() {
            return;
        }
        let mut log = Log::default();
        log.add_info(race, events);
        self.logs.push(log);
    }

    pub fn player_words(&self) -> usize {
        self.events()
            .filter(|event| matches!(event, Event::PlayerWord(_)))
            .count()
    }

    pub fn ai_words(&self) -> usize {
        self.events()
            .filter(|event| matches!(event, Event::AiWord(_)))
            .count()
    }

    fn events(&self) -> impl Iterator<Item = &Event> {
        self.logs.iter().flat_map(|log| &log.events)
    }
}

/// Renders finished races as one JSON document.
pub fn export(races: &[RaceLog]) -> serde_json::Value {
    serde_json::json!({ "races": races })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::driver::{Always, Never};
    use crate::game::Rules;
    use crate::words::ScriptedWords;

    #[test]
    fn quiet_ticks_are_not_logged() {
        let mut words = ScriptedWords::new(["keyboard"]).unwrap();
        let mut race = Race::new(Rules::from(&GameConfig::default()), &mut words);
        let mut log = RaceLog::default();
        for _ in 0..10 {
            let events = race.tick(&mut String::new(), &mut words, &mut Never);
            log.record(&race, events);
        }
        assert!(log.logs.is_empty());
        assert_eq!(log.ticks, 10);
        assert_eq!(log.winner, None);
    }

    #[test]
    fn word_events_are_counted() {
        let mut words = ScriptedWords::new(["a"]).unwrap();
        let mut race = Race::new(Rules::from(&GameConfig::default()), &mut words);
        let mut log = RaceLog::default();
        for _ in 0..3 {
            let events = race.tick(&mut String::from("a"), &mut words, &mut Always);
            log.record(&race, events);
        }
        assert_eq!(log.logs.len(), 3);
        assert_eq!(log.player_words(), 3);
        assert_eq!(log.ai_words(), 3);
        assert_eq!(log.logs[2].cars[0].name, "PLAYER");
    }

    #[test]
    fn export_wraps_races() {
        let json = export(&[RaceLog::default()]);
        assert_eq!(json["races"].as_array().map(Vec::len), Some(1));
        assert!(json["races"][0]["winner"].is_null());
    }
}
