use std::fmt;
use std::ops::Index;

use crate::{EngineError, Result, GRID_SIZE};

/// Pixel rows of a glyph, `rows[y][x]`
pub type GridRows = [[bool; GRID_SIZE]; GRID_SIZE];

/// The 8×8 bit matrix being edited.
///
/// Cells are stored row-major and addressed as `(x, y)` with `(0, 0)` in the
/// top left corner. The dimensions are fixed at [`GRID_SIZE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: GridRows,
}

impl Grid {
    /// Create an empty grid (all cells off)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid with every cell on
    pub fn filled() -> Self {
        Self {
            cells: [[true; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn from_rows(cells: GridRows) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &GridRows {
        &self.cells
    }

    /// Get a cell, `None` if `(x, y)` lies outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(EngineError::CellOutOfBounds { x, y });
        }
        self.cells[y][x] = value;
        Ok(())
    }

    /// Flip a single cell and return its new value
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return Err(EngineError::CellOutOfBounds { x, y });
        }
        self.cells[y][x] = !self.cells[y][x];
        Ok(self.cells[y][x])
    }

    pub fn clear(&mut self) {
        self.cells = [[false; GRID_SIZE]; GRID_SIZE];
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| !cell)
    }

    /// Number of cells that are on
    pub fn count_set(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Rotate by 90° clockwise.
    ///
    /// The cell at `(x, y)` moves to `(GRID_SIZE - 1 - y, x)`.
    pub fn rotate_clockwise(&self) -> Grid {
        let mut rotated = [[false; GRID_SIZE]; GRID_SIZE];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                rotated[x][GRID_SIZE - 1 - y] = cell;
            }
        }
        Grid { cells: rotated }
    }

    /// Rotate clockwise `times` quarter turns
    pub fn rotated(&self, times: usize) -> Grid {
        (0..times % 4).fold(*self, |grid, _| grid.rotate_clockwise())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = bool;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(x < GRID_SIZE, "x must be within the grid");
        assert!(y < GRID_SIZE, "y must be within the grid");
        &self.cells[y][x]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|&cell| if cell { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
