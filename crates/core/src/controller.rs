//! Simulation controller - owns the grid and drives the tick schedule
//!
//! The controller is the only mutator of the grid. While stopped it accepts
//! cell toggles; while running it advances one generation per due tick and
//! rejects edits. The tick schedule is a plain value owned by the controller,
//! so `stop()` and `clear()` cancel it by dropping a single field - there is
//! no free-floating timer handle to chase.
//!
//! Tick delivery is pull-based: the runner loop calls [`SimulationController::tick`]
//! with the current instant, typically after polling input with the timeout
//! from [`SimulationController::next_deadline`]. A step always runs to
//! completion before the loop polls again, so no locking is needed.

use std::time::{Duration, Instant};

use tui_life_types::{
    DEFAULT_INTERVAL_MS, GRID_BOUNDARY, GRID_HEIGHT, GRID_WIDTH, INTERVAL_STEP_MS,
    MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};

use crate::error::{ControlError, GridError};
use crate::grid::Grid;

/// Controller run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// A repeating tick deadline. Exists only while the simulation runs;
/// cancellation is dropping it.
#[derive(Debug, Clone, Copy)]
struct TickSchedule {
    interval: Duration,
    next_due: Instant,
}

impl TickSchedule {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    fn due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Re-arm relative to the tick that just fired. A late tick does not
    /// burst to catch up; the cadence simply restarts from now.
    fn rearm(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}

/// Owns the grid and the start/stop/clear/toggle control surface.
#[derive(Debug)]
pub struct SimulationController {
    grid: Grid,
    schedule: Option<TickSchedule>,
    interval_ms: u32,
    generation: u64,
}

impl SimulationController {
    /// Create a stopped controller over a fresh all-dead grid.
    pub fn new(width: u16, height: u16, boundary: u16) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height, boundary)?,
            schedule: None,
            interval_ms: DEFAULT_INTERVAL_MS,
            generation: 0,
        })
    }

    /// Controller over the standard 120x120 grid with its 20-cell boundary.
    pub fn with_defaults() -> Self {
        // The shared constants satisfy the dimension check.
        Self::new(GRID_WIDTH, GRID_HEIGHT, GRID_BOUNDARY)
            .expect("default grid dimensions are valid")
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        if self.schedule.is_some() {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// Generations advanced since the last `clear()`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current tick interval. Retained across stop/start.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Arm the tick schedule. Only valid while stopped; a second `start`
    /// is rejected rather than rescheduling under the caller's feet.
    ///
    /// The interval is clamped to the supported range, so a zero or absurd
    /// value can never arm a degenerate schedule.
    pub fn start(&mut self, interval_ms: u32) -> Result<(), ControlError> {
        if self.schedule.is_some() {
            return Err(ControlError::AlreadyRunning);
        }

        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        let interval = Duration::from_millis(self.interval_ms as u64);
        self.schedule = Some(TickSchedule::new(interval, Instant::now()));
        Ok(())
    }

    /// Cancel the pending tick schedule. Valid in any state.
    pub fn stop(&mut self) {
        self.schedule = None;
    }

    /// Stop, then replace the board with an all-dead grid of the same
    /// dimensions.
    pub fn clear(&mut self) {
        self.stop();
        self.grid.reset();
        self.generation = 0;
    }

    /// Single play/pause entry point for the UI.
    pub fn toggle_run(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            // Cannot fail from Stopped.
            let _ = self.start(self.interval_ms);
        }
    }

    /// Shorten the tick interval by one step, down to the minimum.
    pub fn faster(&mut self) {
        self.set_interval_ms(self.interval_ms.saturating_sub(INTERVAL_STEP_MS));
    }

    /// Lengthen the tick interval by one step, up to the maximum.
    pub fn slower(&mut self) {
        self.set_interval_ms(self.interval_ms.saturating_add(INTERVAL_STEP_MS));
    }

    /// Set the tick interval, clamped to the supported range. Applies to the
    /// armed schedule from its next re-arm.
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        if let Some(schedule) = self.schedule.as_mut() {
            schedule.interval = Duration::from_millis(self.interval_ms as u64);
        }
    }

    /// Flip one cell, addressed in visible (viewport-relative) coordinates.
    ///
    /// Only valid while stopped; the board is frozen mid-run. The boundary
    /// offset is added here, so `(0, 0)` is the top-left *rendered* cell.
    /// Coordinates past the grid edge propagate as out-of-range and leave
    /// the grid untouched.
    pub fn request_toggle(&mut self, x: u16, y: u16) -> Result<(), ControlError> {
        if self.is_running() {
            return Err(ControlError::EditWhileRunning);
        }

        let b = self.grid.boundary() as i32;
        self.grid.toggle(x as i32 + b, y as i32 + b)?;
        Ok(())
    }

    /// Advance one generation if the schedule is armed and due at `now`.
    ///
    /// Returns `true` when a generation ran (the render notification).
    /// A stopped controller always returns `false`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if !schedule.due(now) {
            return false;
        }

        schedule.rearm(now);
        self.grid.step();
        self.generation += 1;
        true
    }

    /// Time until the next due tick, for use as an input poll timeout.
    /// `None` while stopped.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .map(|s| s.next_due.saturating_duration_since(now))
    }
}
