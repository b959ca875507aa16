//! Internal setters for the glyph editor
//!
//! All grid changes end up here so the byte array and text panel never go
//! stale.

use glyph_engine::{column_report, encode, Grid};

use super::GlyphEditState;

impl GlyphEditState {
    /// Replace the grid and rebuild derived data
    pub(crate) fn set_grid_internal(&mut self, grid: Grid) {
        self.grid = grid;
        self.is_dirty = true;
        self.refresh_internal();
    }

    /// Rebuild byte array and text panel from the grid
    pub(crate) fn refresh_internal(&mut self) {
        self.bytes = encode(&self.grid, self.bit_order);
        self.text = column_report(&self.bytes, &self.column_label);
    }
}
