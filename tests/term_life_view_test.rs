//! View tests - board geometry, cell glyphs, and mouse hit testing.

use tui_life::core::SimulationController;
use tui_life::term::{LifeView, Viewport};

/// 12x12 grid with a 2-cell boundary: visible window is 8x8 cells.
/// At cell_w=2 / cell_h=1 the bordered frame is 18x10 characters.
fn small_sim() -> SimulationController {
    SimulationController::new(12, 12, 2).unwrap()
}

fn frame_text(fb: &tui_life::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let sim = small_sim();
    let view = LifeView::default();

    // Viewport 18x14: frame centered at origin (0, 2).
    let fb = view.render(&sim, Viewport::new(18, 14));

    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(17, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_a_toggled_cell_two_chars_wide() {
    let mut sim = small_sim();
    sim.request_toggle(3, 4).unwrap();

    let view = LifeView::default();
    let fb = view.render(&sim, Viewport::new(18, 14));

    // Interior origin is (1, 3); cell (3, 4) lands at (1 + 3*2, 3 + 4).
    assert_eq!(fb.get(7, 7).unwrap().ch, '█');
    assert_eq!(fb.get(8, 7).unwrap().ch, '█');

    // Its neighbor is still a dead-cell dot.
    assert_eq!(fb.get(9, 7).unwrap().ch, '·');
}

#[test]
fn term_view_hit_test_inverts_the_cell_geometry() {
    let sim = small_sim();
    let view = LifeView::default();
    let vp = Viewport::new(18, 14);

    // Both columns of the rendered cell resolve to the same grid cell.
    assert_eq!(view.hit_test(&sim, vp, 7, 7), Some((3, 4)));
    assert_eq!(view.hit_test(&sim, vp, 8, 7), Some((3, 4)));

    // Border and outside positions are not cells.
    assert_eq!(view.hit_test(&sim, vp, 0, 2), None);
    assert_eq!(view.hit_test(&sim, vp, 17, 7), None);
    assert_eq!(view.hit_test(&sim, vp, 7, 0), None);
}

#[test]
fn term_view_click_then_render_round_trip() {
    let mut sim = small_sim();
    let view = LifeView::default();
    let vp = Viewport::new(18, 14);

    let (x, y) = view.hit_test(&sim, vp, 11, 9).unwrap();
    sim.request_toggle(x, y).unwrap();

    let fb = view.render(&sim, vp);
    assert_eq!(fb.get(11, 9).unwrap().ch, '█');
}

#[test]
fn term_view_shows_run_state_in_the_status_line() {
    let mut sim = small_sim();
    let view = LifeView::default();

    let fb = view.render(&sim, Viewport::new(60, 16));
    assert!(frame_text(&fb).contains("STOPPED"));

    sim.start(100).unwrap();
    let fb = view.render(&sim, Viewport::new(60, 16));
    let text = frame_text(&fb);
    assert!(text.contains("RUNNING"));
    assert!(text.contains("100 ms"));
}

#[test]
fn term_view_clips_when_the_viewport_is_too_small() {
    let mut sim = small_sim();
    sim.request_toggle(7, 7).unwrap();
    let view = LifeView::default();

    // Far smaller than the 18x10 frame; must not panic, just clip.
    let fb = view.render(&sim, Viewport::new(10, 4));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 4);
}
