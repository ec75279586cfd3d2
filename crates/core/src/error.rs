//! Error types for grid and controller operations.
//!
//! Every error here is local and recoverable: a rejected request leaves the
//! simulation exactly as it was. Nothing in this crate aborts the process.

use thiserror::Error;

/// Errors raised by [`crate::grid::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A toggle addressed a cell outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    /// The requested dimensions cannot hold the boundary padding plus at
    /// least one steppable interior ring.
    #[error("a {width}x{height} grid cannot carry a {boundary}-cell boundary on each side")]
    InvalidConfiguration {
        width: u16,
        height: u16,
        boundary: u16,
    },
}

/// Errors raised by [`crate::controller::SimulationController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    /// `start` was called while a tick schedule is already armed.
    #[error("simulation is already running")]
    AlreadyRunning,

    /// A cell toggle was requested mid-run; the board is frozen while the
    /// simulation runs.
    #[error("the grid cannot be edited while the simulation is running")]
    EditWhileRunning,

    #[error(transparent)]
    Grid(#[from] GridError),
}
