//! Glyph editing module
//!
//! Provides the model layer for the 8×8 glyph editor:
//! - `GlyphEditState` - the editor session owning the grid
//! - `EditorMessage` / `EditorResponse` - UI events and their outcome
//! - Clipboard access for the byte array literal
//!
//! The UI only reads from `GlyphEditState` and feeds it messages.

pub mod clipboard;
mod edit_state;
mod message;

pub use clipboard::{GlyphClipboard, GlyphClipboardError, MemoryClipboard, SystemClipboard};
pub use edit_state::*;
pub use message::{EditorMessage, EditorResponse, Notification, PasteError};

// Re-export the model types the UI needs
pub use glyph_engine::{BitOrder, ByteArray, EngineError, Grid, Result, GRID_SIZE};

/// Canvas cell size in pixels used when mapping clicks to cells
pub const DEFAULT_CELL_SIZE: i32 = 40;
