//! Terminal game runner.
//!
//! Real-time pacing: the tick interval is derived from the engine's current
//! speed, input is polled without blocking the loop, and a hard drop forces
//! an immediate tick so the lock is not delayed by pacing.

use std::time::{Duration, Instant};

use anyhow::Result;

use termtris::core::Game;
use termtris::diag;
use termtris::input::{self, Polled};
use termtris::term::{min_viewport, GameView, Surface, TerminalRenderer};
use termtris::types::InputEvent;

fn main() -> Result<()> {
    diag::init_from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always restore the terminal, even on error.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::new(seed);

    let view = GameView;
    let (min_w, min_h) = min_viewport();
    let mut surface = Surface::new(min_w, min_h);

    let mut before = Instant::now();
    // Most recent unconsumed input; the engine sees one event per tick.
    let mut staged: Option<InputEvent> = None;

    loop {
        let interval = Duration::from_secs_f32(game.interval());
        let timeout = interval.saturating_sub(before.elapsed());

        match input::poll(timeout)? {
            Polled::Quit => return Ok(()),
            Polled::Game(ev) => staged = Some(ev),
            Polled::None => {}
        }

        let elapsed = before.elapsed();
        let drop_pending = staged == Some(InputEvent::HardDrop);
        if elapsed >= interval || drop_pending || game.take_force() {
            before = Instant::now();

            if let Some(ev) = staged.take() {
                game.handle_input(ev);
            }
            game.update(elapsed.as_secs_f32());

            let (w, h) = crossterm::terminal::size().unwrap_or((min_w, min_h));
            surface.resize(w.max(min_w), h.max(min_h));
            view.render(&game, &mut surface);
            term.draw_swap(&mut surface)?;

            if game.game_over() {
                return wait_for_quit();
            }
        }
    }
}

/// Leave the final frame up until the player dismisses it.
fn wait_for_quit() -> Result<()> {
    loop {
        if input::poll(Duration::from_millis(250))? != Polled::None {
            return Ok(());
        }
    }
}
