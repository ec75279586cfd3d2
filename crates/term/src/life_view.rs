//! LifeView: maps the visible grid window into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws only what [`tui_life_core::Grid`]
//! exposes through `visible_cells()`, so the hidden boundary padding never
//! reaches the screen. It also answers the inverse question: which cell is
//! under a given terminal position (for mouse toggling).

use tui_life_core::{Grid, RunState, SimulationController};

use crate::fb::{FrameBuffer, Rgb, Style};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Placement of the bordered board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct BoardFrame {
    origin_x: u16,
    origin_y: u16,
    /// Frame size including the one-character border.
    width: u16,
    height: u16,
}

/// A lightweight terminal view of the simulation.
pub struct LifeView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio, so
        // cells come out roughly square like the original canvas rectangles.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl LifeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the simulation into a fresh framebuffer.
    pub fn render(&self, sim: &SimulationController, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, viewport, &mut fb);
        fb
    }

    /// Render into a caller-owned framebuffer, reusing its allocation.
    pub fn render_into(&self, sim: &SimulationController, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Default::default());

        let frame = self.frame(sim.grid(), viewport);

        let board_bg = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(20, 20, 28),
            dim: true,
        };
        let border = Style {
            fg: Rgb::new(175, 175, 175),
            bg: Rgb::new(0, 0, 0),
            dim: false,
        };
        let alive = Style {
            fg: Rgb::new(120, 220, 120),
            bg: Rgb::new(20, 20, 28),
            dim: false,
        };

        // Dead background with a faint grid dot per cell.
        fb.fill_rect(
            frame.origin_x + 1,
            frame.origin_y + 1,
            frame.width - 2,
            frame.height - 2,
            ' ',
            board_bg,
        );
        for (vx, vy, state) in sim.grid().visible_cells() {
            if state.is_alive() {
                self.fill_cell_rect(fb, frame, vx, vy, '█', alive);
            } else {
                self.fill_cell_rect(fb, frame, vx, vy, '·', board_bg);
            }
        }

        self.draw_border(fb, frame, border);
        self.draw_status(fb, sim, viewport, frame);
    }

    /// Map a terminal position to the visible cell under it, if any.
    ///
    /// This is the terminal rendition of "pointer position divided by cell
    /// size": positions on the border, outside the frame, or outside the
    /// viewport resolve to `None`.
    pub fn hit_test(
        &self,
        sim: &SimulationController,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<(u16, u16)> {
        let frame = self.frame(sim.grid(), viewport);
        let inner_x = column.checked_sub(frame.origin_x + 1)?;
        let inner_y = row.checked_sub(frame.origin_y + 1)?;

        let x = inner_x / self.cell_w;
        let y = inner_y / self.cell_h;
        if x < sim.grid().visible_width() && y < sim.grid().visible_height() {
            Some((x, y))
        } else {
            None
        }
    }

    fn frame(&self, grid: &Grid, viewport: Viewport) -> BoardFrame {
        let px_w = grid.visible_width() * self.cell_w;
        let px_h = grid.visible_height() * self.cell_h;
        let width = px_w + 2;
        let height = px_h + 2;

        BoardFrame {
            origin_x: viewport.width.saturating_sub(width) / 2,
            origin_y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: BoardFrame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = frame.origin_x + 1 + cell_x * self.cell_w;
        let py = frame.origin_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: BoardFrame, style: Style) {
        let (x, y, w, h) = (frame.origin_x, frame.origin_y, frame.width, frame.height);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        sim: &SimulationController,
        viewport: Viewport,
        frame: BoardFrame,
    ) {
        let status_y = frame.origin_y.saturating_add(frame.height);
        if status_y >= viewport.height {
            return;
        }

        let label = Style {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(0, 0, 0),
            dim: false,
        };
        let state = match sim.state() {
            RunState::Running => "RUNNING",
            RunState::Stopped => "STOPPED",
        };
        let status = format!(
            "{}  gen {}  {} ms  pop {}",
            state,
            sim.generation(),
            sim.interval_ms(),
            sim.grid().population(),
        );
        fb.put_str(frame.origin_x, status_y, &status, label);

        let help_y = status_y.saturating_add(1);
        if help_y >= viewport.height {
            return;
        }
        let help = Style {
            fg: Rgb::new(150, 150, 150),
            bg: Rgb::new(0, 0, 0),
            dim: true,
        };
        fb.put_str(
            frame.origin_x,
            help_y,
            "click toggle  space run/stop  c clear  +/- speed  q quit",
            help,
        );
    }
}
