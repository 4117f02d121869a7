//! Host side of the game: a backend that supplies input and draws frames,
//! and the fixed-rate loop that drives a [`Session`] through it.

use std::thread;
use std::time::{Duration, Instant};

use color_eyre::Result;

use crate::action::Action;
use crate::session::{Flow, Session, Snapshot};

pub mod terminal;

pub trait Backend {
    /// Drains every input event that arrived since the last call.
    fn poll(&mut self) -> Result<Vec<Action>>;
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

pub fn frame_duration(tick_rate: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(tick_rate.max(1)))
}

/// Runs until the backend reports a quit. Each frame: drain input, one tick,
/// render, sleep out the rest of `frame`. Returns the number of frames drawn.
pub fn run(session: &mut Session, backend: &mut dyn Backend, frame: Duration) -> Result<u64> {
    let mut frames = 0;
    loop {
        let started = Instant::now();

        for action in backend.poll()? {
            if session.handle(action) == Flow::Quit {
                return Ok(frames);
            }
        }

        session.tick();
        backend.render(&session.snapshot())?;
        frames += 1;

        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hertz_frame() {
        let frame = frame_duration(60);
        assert!((frame.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
