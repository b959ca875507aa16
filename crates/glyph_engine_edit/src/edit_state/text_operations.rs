//! Literal export and import
//!
//! Import goes through `parse_literal` and `decode` before anything is
//! written, so a malformed literal leaves the grid as it was.

use glyph_engine::{decode, format_literal, parse_literal, Result};

use super::GlyphEditState;

impl GlyphEditState {
    /// The byte array as `{ 0xHH, ... }`
    pub fn export_literal(&self) -> String {
        format_literal(&self.bytes)
    }

    /// Replace the grid with the glyph described by `text`
    pub fn import_literal(&mut self, text: &str) -> Result<()> {
        let bytes = parse_literal(text).inspect_err(|err| log::warn!("Rejected literal: {err}"))?;
        let grid = decode(&bytes, self.bit_order)?;
        log::debug!("Imported {}", format_literal(&bytes));
        self.set_grid_internal(grid);
        Ok(())
    }

    /// Import from the (possibly user edited) text panel
    pub fn load_from_text(&mut self) -> Result<()> {
        let text = self.text.clone();
        self.import_literal(&text)
    }
}
