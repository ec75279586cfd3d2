//! Core simulation logic - pure, deterministic, and testable
//!
//! This crate contains the Game of Life rules, the grid data model, and the
//! controller that owns the tick schedule. It has **zero dependencies** on
//! UI or I/O, making it:
//!
//! - **Deterministic**: a given board always produces the same next generation
//! - **Testable**: every rule and transition is covered by plain unit tests
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//! - **Fast**: the step hot path allocates nothing after warm-up
//!
//! # Module structure
//!
//! - [`grid`]: fixed 120x120 cell grid with hidden boundary padding, the
//!   8-neighbor count, and the two-phase generation step
//! - [`controller`]: start/stop/clear/toggle control surface and the owned,
//!   cancellable tick schedule
//! - [`error`]: typed, recoverable errors for both
//!
//! # The boundary scheme
//!
//! The grid carries 20 hidden padding cells on every side so patterns can
//! drift past the rendered window and keep evolving. Only the single
//! outermost cell ring is frozen (no full neighbor count exists there).
//! Patterns that reach that ring stop behaving correctly - a documented
//! limitation of the bounded grid, not something the step tries to patch up.

pub mod controller;
pub mod error;
pub mod grid;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use controller::{RunState, SimulationController};
pub use error::{ControlError, GridError};
pub use grid::Grid;
