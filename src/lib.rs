#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! A two-lane typing race: the player's car moves when they type the word
//! shown above it, the AI's car moves on a random typing cadence, and the
//! first car across the finish line wins.

pub mod action;
pub mod car;
pub mod config;
pub mod driver;
pub mod game;
pub mod log;
pub mod matcher;
pub mod physics;
pub mod runtime;
pub mod session;
pub mod words;

pub use action::Action;
pub use config::{ConfigError, GameConfig};
pub use game::{Event, Outcome, Race};
pub use session::{Flow, Phase, Session, Snapshot};
