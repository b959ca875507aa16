//! Glyph Edit State
//!
//! The editor session for one 8×8 glyph. It owns the grid exclusively; the
//! byte array and the text panel are derived from it and rebuilt after every
//! change (see `internal.rs`).
//!
//! Failed imports never touch the grid.

use glyph_engine::{column_report, encode, BitOrder, ByteArray, Grid};

/// Default label of the column lines in the text panel
pub const DEFAULT_COLUMN_LABEL: &str = "Column";

// ═══════════════════════════════════════════════════════════════════════════
// Glyph Edit State
// ═══════════════════════════════════════════════════════════════════════════

/// Main state container for glyph editing
pub struct GlyphEditState {
    /// The glyph being edited
    pub(crate) grid: Grid,

    /// Row to bit mapping used for export and import
    pub(crate) bit_order: BitOrder,

    /// Encoded grid, one byte per column
    pub(crate) bytes: ByteArray,

    /// Text panel content. Rebuilt from `bytes` on every change, editable by the user.
    pub(crate) text: String,

    /// Localized "Column" label used in the text panel
    pub(crate) column_label: String,

    /// Whether the grid changed since the last export
    pub(crate) is_dirty: bool,
}

impl Default for GlyphEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a session with an empty grid and the default bit order
    pub fn new() -> Self {
        Self::with_bit_order(BitOrder::default())
    }

    pub fn with_bit_order(bit_order: BitOrder) -> Self {
        Self::from_grid(Grid::new(), bit_order)
    }

    pub fn from_grid(grid: Grid, bit_order: BitOrder) -> Self {
        let bytes = encode(&grid, bit_order);
        let text = column_report(&bytes, DEFAULT_COLUMN_LABEL);
        Self {
            grid,
            bit_order,
            bytes,
            text,
            column_label: DEFAULT_COLUMN_LABEL.to_string(),
            is_dirty: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// Current byte array (always in sync with the grid)
    pub fn bytes(&self) -> &ByteArray {
        &self.bytes
    }

    /// Text panel content
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn column_label(&self) -> &str {
        &self.column_label
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic Setters (UI state)
    // ═══════════════════════════════════════════════════════════════════════

    /// Set the column label and rebuild the text panel
    pub fn set_column_label(&mut self, label: impl Into<String>) {
        self.column_label = label.into();
        self.refresh_internal();
    }

    /// Replace the text panel content without touching the grid
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Switch bit order. The grid stays, the byte array is re-encoded.
    pub fn set_bit_order(&mut self, bit_order: BitOrder) {
        if self.bit_order == bit_order {
            return;
        }
        log::debug!("Bit order {:?} -> {:?}", self.bit_order, bit_order);
        self.bit_order = bit_order;
        self.refresh_internal();
    }

    /// Mark as clean (after export)
    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }
}
