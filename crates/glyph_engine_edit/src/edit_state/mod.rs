//! Glyph edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters
//! - `grid_operations.rs` - Cell toggling, click mapping, rotate, clear
//! - `text_operations.rs` - Literal export/import and the text panel
//! - `clipboard.rs` - Copy and paste
//! - `update.rs` - Message dispatch for the UI
//! - `internal.rs` - Grid replacement and derived data refresh

mod state;

mod clipboard;
mod grid_operations;
mod internal;
mod text_operations;
mod update;

pub use state::GlyphEditState;
