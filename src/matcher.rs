//! Matches the player's raw input against their car's target word.
//!
//! The typed prefix is recomputed from scratch every tick, so deleting
//! characters from the input shortens it without any extra bookkeeping.

use crate::car::Car;
use crate::words::WordSource;

/// Number of leading characters of `word` that `input` gets right, comparing
/// case-insensitively. Stops at the first mismatch.
pub fn matched_prefix_len(input: &str, word: &str) -> usize {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .zip(word.chars())
        .take_while(|(typed, expected)| typed == expected)
        .count()
}

/// Whole-input equality, not just a prefix: trailing extra characters fail.
pub fn is_complete(input: &str, word: &str) -> bool {
    input.to_lowercase() == word
}

/// Applies one tick of player typing to `car`.
///
/// On a completed word the car is boosted, handed a fresh word and `input`
/// is cleared. Returns whether a word was completed.
pub fn update(car: &mut Car, input: &mut String, words: &mut dyn WordSource, boost: f64) -> bool {
    let completed = is_complete(input, car.word());
    if completed {
        car.boost(boost);
        car.assign_new_word(words);
        input.clear();
    }
    car.set_typed(matched_prefix_len(input, car.word()));
    completed
}
