//! Grid module - the cell container and the generation-step algorithm
//!
//! The grid is a fixed-size rectangle of cells stored as a flat array for
//! cache locality. Coordinates are `(x, y)` with `x` growing rightward and
//! `y` growing downward, both starting at 0.
//!
//! The outermost one-cell ring is frozen: a full 8-neighbor count cannot be
//! computed there without reading out of bounds, so [`Grid::step`] never
//! evaluates or mutates it. Combined with the hidden boundary padding this
//! keeps the visible window looking unbounded, but a pattern that actually
//! reaches the frozen ring stops evolving correctly. That is a known
//! limitation of the bounded-grid scheme, kept deliberately.

use tui_life_types::CellState;

use crate::error::GridError;

/// Fixed-size cell grid with a hidden boundary region.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u16,
    height: u16,
    boundary: u16,
    /// Flat array of cells, row-major order (y * width + x).
    cells: Vec<CellState>,
    /// Scratch list of flat indices to flip, reused across steps so the hot
    /// path stays allocation-free once warmed up.
    flips: Vec<usize>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// Rejects dimensions that leave no steppable interior: both dimensions
    /// must be at least 3 and strictly larger than twice the boundary width.
    pub fn new(width: u16, height: u16, boundary: u16) -> Result<Self, GridError> {
        // Widened so a huge boundary cannot overflow the comparison.
        let padding = 2 * boundary as u32;
        if width < 3 || height < 3 || width as u32 <= padding || height as u32 <= padding {
            return Err(GridError::InvalidConfiguration {
                width,
                height,
                boundary,
            });
        }

        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            boundary,
            cells: vec![CellState::Dead; len],
            flips: Vec::new(),
        })
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn boundary(&self) -> u16 {
        self.boundary
    }

    /// Width of the rendered window (total minus padding on both sides).
    pub fn visible_width(&self) -> u16 {
        (self.width as u32 - 2 * self.boundary as u32) as u16
    }

    /// Height of the rendered window.
    pub fn visible_height(&self) -> u16 {
        (self.height as u32 - 2 * self.boundary as u32) as u16
    }

    /// Get the cell at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Raw cell slice in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of living cells on the whole grid, padding included.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Flip the cell at (x, y).
    ///
    /// This is the only way to write the frozen outer ring. Out-of-range
    /// coordinates are rejected and leave the grid untouched.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i].flip();
                Ok(())
            }
            None => Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Count living cells among the eight neighbors of (x, y). No wraparound.
    ///
    /// Precondition: (x, y) lies in the interior, `1 <= x <= width-2` and
    /// `1 <= y <= height-2`. Violating this is a caller bug, not a
    /// recoverable condition.
    #[inline]
    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        debug_assert!(x >= 1 && x <= self.width as i32 - 2);
        debug_assert!(y >= 1 && y <= self.height as i32 - 2);

        let w = self.width as usize;
        let i = (y as usize) * w + (x as usize);
        let neighbors = [
            i - w - 1,
            i - w,
            i - w + 1,
            i - 1,
            i + 1,
            i + w - 1,
            i + w,
            i + w + 1,
        ];

        let mut count = 0;
        for n in neighbors {
            if self.cells[n].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Advance the grid by exactly one generation.
    ///
    /// Two phases: first every interior cell is judged against the pre-step
    /// state (alive with fewer than 2 or more than 3 neighbors dies, dead
    /// with exactly 3 comes alive), then all recorded flips are applied.
    /// No cell's new state can leak into another cell's neighbor count
    /// within the same step. The outermost ring is skipped entirely.
    pub fn step(&mut self) {
        let w = self.width as usize;

        self.flips.clear();
        for y in 1..(self.height as i32 - 1) {
            for x in 1..(self.width as i32 - 1) {
                let i = (y as usize) * w + (x as usize);
                let count = self.neighbor_count(x, y);
                let flips = match self.cells[i] {
                    CellState::Alive => !(2..=3).contains(&count),
                    CellState::Dead => count == 3,
                };
                if flips {
                    self.flips.push(i);
                }
            }
        }

        for &i in &self.flips {
            self.cells[i].flip();
        }
    }

    /// Kill every cell. Dimensions and allocation are kept.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Iterate the rendered window in viewport-relative coordinates.
    ///
    /// Yields `(x, y, state)` in viewport coordinates,
    /// `0 <= x < width - 2*boundary` (same for y), each read from grid
    /// column `x + boundary` and row `y + boundary`. This is the
    /// read-only view handed to the
    /// renderer; the padding and the frozen ring never appear in it.
    pub fn visible_cells(&self) -> impl Iterator<Item = (u16, u16, CellState)> + '_ {
        let w = self.width as usize;
        let b = self.boundary;
        let vw = self.visible_width();
        let vh = self.visible_height();
        let cells = &self.cells;

        (0..vh).flat_map(move |vy| {
            (0..vw).map(move |vx| {
                let i = ((vy + b) as usize) * w + (vx + b) as usize;
                (vx, vy, cells[i])
            })
        })
    }
}
