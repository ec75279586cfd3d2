//! Controller tests - lifecycle, edit gating, and tick scheduling.

use std::time::{Duration, Instant};

use tui_life::core::{ControlError, GridError, RunState, SimulationController};
use tui_life::types::{
    CellState, DEFAULT_INTERVAL_MS, GRID_BOUNDARY, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};

#[test]
fn test_defaults_match_the_standard_grid() {
    let sim = SimulationController::with_defaults();
    assert_eq!(sim.state(), RunState::Stopped);
    assert_eq!(sim.grid().width(), 120);
    assert_eq!(sim.grid().height(), 120);
    assert_eq!(sim.grid().boundary(), GRID_BOUNDARY);
    assert_eq!(sim.interval_ms(), DEFAULT_INTERVAL_MS);
}

#[test]
fn test_start_stop_lifecycle() {
    let mut sim = SimulationController::with_defaults();

    sim.start(100).unwrap();
    assert_eq!(sim.state(), RunState::Running);

    // A second start is rejected, consistently, and changes nothing.
    assert_eq!(sim.start(500), Err(ControlError::AlreadyRunning));
    assert_eq!(sim.interval_ms(), 100);

    sim.stop();
    assert_eq!(sim.state(), RunState::Stopped);

    // stop() is valid while already stopped.
    sim.stop();
    assert_eq!(sim.state(), RunState::Stopped);
}

#[test]
fn test_interval_is_clamped_to_the_slider_range() {
    let mut sim = SimulationController::with_defaults();
    sim.start(0).unwrap();
    assert_eq!(sim.interval_ms(), MIN_INTERVAL_MS);
    sim.stop();

    sim.start(1_000_000).unwrap();
    assert_eq!(sim.interval_ms(), MAX_INTERVAL_MS);
}

#[test]
fn test_request_toggle_translates_into_the_visible_window() {
    let mut sim = SimulationController::with_defaults();
    sim.request_toggle(0, 0).unwrap();

    // The top-left visible cell lives at the boundary offset in grid space.
    let b = GRID_BOUNDARY as i32;
    assert_eq!(sim.grid().get(b, b), Some(CellState::Alive));
    assert_eq!(sim.grid().get(0, 0), Some(CellState::Dead));

    // And the visible view reports it at (0, 0).
    let (x, y, state) = sim.grid().visible_cells().next().unwrap();
    assert_eq!((x, y), (0, 0));
    assert!(state.is_alive());
}

#[test]
fn test_request_toggle_rejected_while_running() {
    let mut sim = SimulationController::with_defaults();
    sim.request_toggle(10, 10).unwrap();
    sim.start(100).unwrap();

    let before = sim.grid().cells().to_vec();
    assert_eq!(
        sim.request_toggle(10, 10),
        Err(ControlError::EditWhileRunning)
    );
    assert_eq!(sim.grid().cells(), &before[..]);
}

#[test]
fn test_request_toggle_out_of_range_is_rejected() {
    let mut sim = SimulationController::with_defaults();
    let before = sim.grid().cells().to_vec();

    assert!(matches!(
        sim.request_toggle(10_000, 0),
        Err(ControlError::Grid(GridError::OutOfRange { .. }))
    ));
    assert_eq!(sim.grid().cells(), &before[..]);
}

#[test]
fn test_tick_advances_one_generation_when_due() {
    let mut sim = SimulationController::with_defaults();
    // A blinker so the step visibly does something.
    sim.request_toggle(39, 40).unwrap();
    sim.request_toggle(40, 40).unwrap();
    sim.request_toggle(41, 40).unwrap();

    sim.start(50).unwrap();
    assert!(!sim.tick(Instant::now()), "tick fired before the interval");
    assert_eq!(sim.generation(), 0);

    let due = Instant::now() + Duration::from_millis(60);
    assert!(sim.tick(due));
    assert_eq!(sim.generation(), 1);

    // The blinker flipped to vertical.
    let b = GRID_BOUNDARY as i32;
    assert_eq!(sim.grid().get(b + 40, b + 39), Some(CellState::Alive));
    assert_eq!(sim.grid().get(b + 39, b + 40), Some(CellState::Dead));

    // Re-armed: not due again immediately.
    assert!(!sim.tick(Instant::now()));
}

#[test]
fn test_stop_cancels_the_pending_tick() {
    let mut sim = SimulationController::with_defaults();
    sim.start(50).unwrap();
    sim.stop();

    assert!(!sim.tick(Instant::now() + Duration::from_secs(10)));
    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.next_deadline(Instant::now()), None);
}

#[test]
fn test_clear_yields_an_all_dead_view_and_a_stopped_controller() {
    let mut sim = SimulationController::with_defaults();
    for i in 0..20 {
        sim.request_toggle(i, i).unwrap();
    }
    sim.start(50).unwrap();
    sim.tick(Instant::now() + Duration::from_millis(60));

    sim.clear();
    assert_eq!(sim.state(), RunState::Stopped);
    assert_eq!(sim.generation(), 0);
    assert!(sim.grid().visible_cells().all(|(_, _, s)| !s.is_alive()));
    assert_eq!(sim.grid().population(), 0);
}

#[test]
fn test_toggle_run_round_trip_preserves_the_interval() {
    let mut sim = SimulationController::with_defaults();
    sim.start(200).unwrap();
    sim.toggle_run();
    assert_eq!(sim.state(), RunState::Stopped);

    sim.toggle_run();
    assert_eq!(sim.state(), RunState::Running);
    assert_eq!(sim.interval_ms(), 200);
}
