//! Flushes a surface to the real terminal with crossterm.
//!
//! Owns terminal lifecycle (raw mode, alternate screen) and diffs against the
//! previously flushed frame so steady-state ticks write only changed runs.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::Surface;
use crate::types::ColorId;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Surface>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush `surface`, diffing against the previous frame. The surface is
    /// swapped into internal state so the caller can reuse its old buffer.
    pub fn draw_swap(&mut self, surface: &mut Surface) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == surface.width() && prev.height() == surface.height() => {
                prev
            }
            _ => {
                self.full_redraw(surface)?;
                let fresh = surface.clone();
                self.last = Some(fresh);
                return Ok(());
            }
        };

        self.diff_redraw(surface, &prev)?;
        std::mem::swap(&mut prev, surface);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, surface: &Surface) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style: Option<ColorId> = None;
        for y in 0..surface.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..surface.width() {
                let cell = surface.get(x, y).unwrap_or_default();
                self.emit(cell.ch, cell.color, &mut style)?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &Surface, prev: &Surface) -> Result<()> {
        let mut style: Option<ColorId> = None;

        for y in 0..next.height() {
            let mut x = 0;
            while x < next.width() {
                if prev.get(x, y) == next.get(x, y) {
                    x += 1;
                    continue;
                }
                // Start of a changed run: one cursor move, then print through.
                self.stdout.queue(cursor::MoveTo(x, y))?;
                while x < next.width() && prev.get(x, y) != next.get(x, y) {
                    let cell = next.get(x, y).unwrap_or_default();
                    self.emit(cell.ch, cell.color, &mut style)?;
                    x += 1;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn emit(&mut self, ch: char, color: ColorId, style: &mut Option<ColorId>) -> Result<()> {
        if *style != Some(color) {
            match palette(color) {
                // Game colors paint solid blocks: foreground equals background.
                Some(c) => {
                    self.stdout.queue(SetForegroundColor(c))?;
                    self.stdout.queue(SetBackgroundColor(c))?;
                }
                None => {
                    self.stdout.queue(ResetColor)?;
                }
            }
            *style = Some(color);
        }
        self.stdout.queue(Print(ch))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Color identity to terminal color, matching the original curses pairs.
/// Identity 0 is neutral (default colors).
fn palette(color: ColorId) -> Option<Color> {
    match color {
        1 => Some(Color::Red),
        2 => Some(Color::White),
        3 => Some(Color::Black),
        4 => Some(Color::Blue),
        5 => Some(Color::Cyan),
        6 => Some(Color::Green),
        7 => Some(Color::Yellow),
        8 => Some(Color::Magenta),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_all_identities() {
        assert_eq!(palette(0), None);
        for id in 1..=8 {
            assert!(palette(id).is_some(), "identity {id}");
        }
        assert_eq!(palette(9), None);
    }
}
