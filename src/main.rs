//! Terminal Game of Life runner (default binary).
//!
//! One cooperative loop on one thread: draw the current frame, poll input
//! with a timeout that expires at the next scheduled tick, dispatch the
//! event, then let the controller advance a generation if one is due.
//! Ticks therefore never interleave with edits or with each other.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_life::core::SimulationController;
use tui_life::input::{map_key_event, should_quit};
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{SimAction, IDLE_POLL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = SimulationController::with_defaults();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&sim, viewport, &mut fb);
        term.present(&mut fb)?;

        // Poll input until the next tick is due (or idle while stopped).
        let timeout = sim
            .next_deadline(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS as u64));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key_event(key) {
                        apply(&mut sim, action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if let Some((x, y)) =
                            view.hit_test(&sim, viewport, mouse.column, mouse.row)
                        {
                            apply(&mut sim, SimAction::ToggleCell { x, y });
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        sim.tick(Instant::now());
    }
}

fn apply(sim: &mut SimulationController, action: SimAction) {
    match action {
        SimAction::ToggleRun => sim.toggle_run(),
        SimAction::Clear => sim.clear(),
        SimAction::Faster => sim.faster(),
        SimAction::Slower => sim.slower(),
        // Rejected toggles (mid-run clicks) are deliberate no-ops for the UI.
        SimAction::ToggleCell { x, y } => {
            let _ = sim.request_toggle(x, y);
        }
    }
}
