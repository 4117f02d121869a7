use std::io::{self, Stdout, Write};
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use crate::action::Action;
use crate::runtime::Backend;
use crate::session::{CarView, Phase, Snapshot};

const PLAYER_ROW: u16 = 3;
const AI_ROW: u16 = 7;
const INPUT_ROW: u16 = 10;
const BANNER_ROW: u16 = 12;

/// Draws the race in a raw-mode terminal on the alternate screen. The
/// terminal is restored when this is dropped.
pub struct TerminalBackend {
    out: Stdout,
    track_width: f64,
    car_width: f64,
    finished: bool,
}

impl TerminalBackend {
    pub fn new(track_width: f64, car_width: f64) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            out,
            track_width,
            car_width,
            finished: false,
        })
    }

    fn map_key(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        match code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(' ') if self.finished => Some(Action::Restart),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    fn column(&self, position: f64, cols: u16) -> u16 {
        let span = f64::from(cols.saturating_sub(1));
        let x = (position / self.track_width * span).clamp(0.0, span);
        x as u16
    }

    fn draw_car(&mut self, car: &CarView, row: u16, cols: u16, color: Color) -> Result<()> {
        let x = self.column(car.position, cols);
        let len = (self.car_width / self.track_width * f64::from(cols)).max(1.0) as usize;
        let rest = car.word.get(car.typed.len()..).unwrap_or_default();
        queue!(
            self.out,
            cursor::MoveTo(x, row - 2),
            SetForegroundColor(Color::Green),
            Print(&car.typed),
            ResetColor,
            Print(rest),
            cursor::MoveTo(0, row),
            Print("-".repeat(usize::from(cols))),
            cursor::MoveTo(x, row),
            SetForegroundColor(color),
            Print("#".repeat(len)),
            ResetColor,
        )?;
        Ok(())
    }
}

impl Backend for TerminalBackend {
    fn poll(&mut self) -> Result<Vec<Action>> {
        let mut actions = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = self.map_key(key.code, key.modifiers) {
                    actions.push(action);
                }
            }
        }
        Ok(actions)
    }

    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.finished = snapshot.phase == Phase::Finished;
        let (cols, _) = terminal::size()?;

        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print("Typing Race  (Esc to quit)"),
        )?;
        self.draw_car(&snapshot.player, PLAYER_ROW, cols, Color::Blue)?;
        self.draw_car(&snapshot.ai, AI_ROW, cols, Color::Red)?;
        queue!(
            self.out,
            cursor::MoveTo(0, INPUT_ROW),
            Print(format!("Typing: {}", snapshot.input)),
        )?;

        if let Some(outcome) = snapshot.outcome {
            queue!(
                self.out,
                cursor::MoveTo(0, BANNER_ROW),
                SetForegroundColor(Color::Yellow),
                Print(format!("{} WINS!", outcome.winner())),
                ResetColor,
                cursor::MoveTo(0, BANNER_ROW + 1),
                Print("Press SPACE to restart"),
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        let _ = execute!(self.out, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}
