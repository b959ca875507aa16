use glyph_engine::GRID_SIZE;

use super::GlyphEditState;

impl GlyphEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Cell Editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Toggle a single cell.
    ///
    /// Coordinates outside the grid are ignored; returns whether the grid changed.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        let mut grid = self.grid;
        match grid.toggle(x, y) {
            Ok(value) => {
                log::debug!("Toggle cell ({x}, {y}) -> {value}");
                self.set_grid_internal(grid);
                true
            }
            Err(_) => false,
        }
    }

    /// Map a canvas position in pixels to a cell
    pub fn cell_at(px: i32, py: i32, cell_size: i32) -> Option<(usize, usize)> {
        if cell_size <= 0 || px < 0 || py < 0 {
            return None;
        }
        let x = (px / cell_size) as usize;
        let y = (py / cell_size) as usize;
        if x < GRID_SIZE && y < GRID_SIZE {
            Some((x, y))
        } else {
            None
        }
    }

    /// Toggle the cell under a canvas click
    pub fn click(&mut self, px: i32, py: i32, cell_size: i32) -> bool {
        match Self::cell_at(px, py, cell_size) {
            Some((x, y)) => self.toggle_cell(x, y),
            None => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Transform
    // ═══════════════════════════════════════════════════════════════════════

    /// Rotate the glyph 90° clockwise
    pub fn rotate_right(&mut self) {
        log::debug!("Rotate right");
        let rotated = self.grid.rotate_clockwise();
        self.set_grid_internal(rotated);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clear
    // ═══════════════════════════════════════════════════════════════════════

    /// Switch all cells off
    pub fn clear(&mut self) {
        log::debug!("Clear grid");
        let mut grid = self.grid;
        grid.clear();
        self.set_grid_internal(grid);
    }
}
