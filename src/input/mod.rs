//! Key mapping and non-blocking event polling.
//!
//! The engine consumes at most one discrete event per tick; absence of input
//! is the normal, frequent outcome and never blocks the loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::InputEvent;

/// Map a key press to a game event.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') => {
            Some(InputEvent::Rotate)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(InputEvent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(InputEvent::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(InputEvent::SoftDrop)
        }
        KeyCode::Char(' ') => Some(InputEvent::HardDrop),
        _ => None,
    }
}

/// True when the key should end the process.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Outcome of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    /// Nothing arrived within the timeout.
    None,
    /// A mapped game event.
    Game(InputEvent),
    /// A quit request.
    Quit,
}

/// Wait up to `timeout` for a key press and map it. Unmapped keys and
/// release/repeat events report as `Polled::None`.
pub fn poll(timeout: Duration) -> Result<Polled> {
    if !event::poll(timeout)? {
        return Ok(Polled::None);
    }
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if should_quit(key) {
                return Ok(Polled::Quit);
            }
            if let Some(ev) = map_key(key) {
                return Ok(Polled::Game(ev));
            }
        }
    }
    Ok(Polled::None)
}
