use serde::{Deserialize, Serialize};

use crate::words::WordSource;

/// One lane's racer.
///
/// `typed` is always a correct prefix of `word`; it is only ever written
/// through [`Car::set_typed`] and [`Car::reveal_next`], which keep that true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub name: String,
    position: f64,
    speed: f64,
    word: String,
    typed: String,
}

impl Car {
    pub fn new(name: impl Into<String>, lane_origin: f64, words: &mut dyn WordSource) -> Self {
        Self {
            name: name.into(),
            position: lane_origin,
            speed: 0.0,
            word: words.next_word(),
            typed: String::new(),
        }
    }

    pub const fn position(&self) -> f64 {
        self.position
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn boost(&mut self, amount: f64) {
        self.speed += amount;
    }

    /// Replaces the target word. Typing progress is lost.
    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
        self.typed.clear();
    }

    pub fn assign_new_word(&mut self, words: &mut dyn WordSource) {
        self.set_word(words.next_word());
    }

    /// Keeps the first `len` characters of the word as the typed prefix.
    pub fn set_typed(&mut self, len: usize) {
        self.typed = self.word.chars().take(len).collect();
    }

    /// Appends the next character of the word. Returns false once the word is
    /// fully typed.
    pub fn reveal_next(&mut self) -> bool {
        match self.word[self.typed.len()..].chars().next() {
            Some(c) => {
                self.typed.push(c);
                true
            }
            None => false,
        }
    }

    pub fn is_word_done(&self) -> bool {
        self.typed == self.word
    }
}
