//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, UI rendering, tests).
//!
//! # Grid dimensions
//!
//! The simulated grid is larger than what is ever shown:
//!
//! - **Width**: 120 columns
//! - **Height**: 120 rows
//! - **Boundary**: 20 cells of hidden padding on each side
//!
//! Only the inner `80x80` window is rendered. The padding is simulated like
//! any other region, so patterns can wander off-screen and come back, which
//! gives the impression of an unbounded plane as long as nothing reaches the
//! outermost cell ring. These three constants are a matched set: changing one
//! changes how far patterns can drift before edge artifacts become visible.
//!
//! # Timing constants
//!
//! Tick intervals are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INTERVAL_MS` | 100 | Generation interval when a run starts |
//! | `MIN_INTERVAL_MS` | 10 | Fastest allowed interval |
//! | `MAX_INTERVAL_MS` | 1000 | Slowest allowed interval |
//! | `INTERVAL_STEP_MS` | 10 | Speed adjustment granularity |
//! | `IDLE_POLL_MS` | 50 | Input poll timeout while stopped |

/// Simulated grid dimensions (cells).
pub const GRID_WIDTH: u16 = 120;
pub const GRID_HEIGHT: u16 = 120;

/// Width of the hidden padding on each of the four sides.
pub const GRID_BOUNDARY: u16 = 20;

/// Tick interval default and bounds (milliseconds).
pub const DEFAULT_INTERVAL_MS: u32 = 100;
pub const MIN_INTERVAL_MS: u32 = 10;
pub const MAX_INTERVAL_MS: u32 = 1000;
pub const INTERVAL_STEP_MS: u32 = 10;

/// Input poll timeout while no tick is scheduled (milliseconds).
pub const IDLE_POLL_MS: u32 = 50;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Flip to the opposite state: a living cell dies, a dead cell comes alive.
    pub fn flip(&mut self) {
        *self = match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        };
    }

    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// Simulation control actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimAction {
    /// Start the tick schedule if stopped, stop it if running.
    ToggleRun,
    /// Stop and wipe the grid.
    Clear,
    /// Shorten the tick interval by one step.
    Faster,
    /// Lengthen the tick interval by one step.
    Slower,
    /// Flip one cell, addressed in visible (viewport-relative) coordinates.
    ToggleCell { x: u16, y: u16 },
}
