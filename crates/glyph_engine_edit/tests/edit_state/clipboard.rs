//! Copy and paste through an in-memory clipboard

use glyph_engine_edit::{BitOrder, EngineError, GlyphClipboard, GlyphClipboardError, GlyphEditState, MemoryClipboard, PasteError};
use pretty_assertions::assert_eq;

use super::helpers::{create_frame, create_state_with_cells};

/// Clipboard that fails every call
struct BrokenClipboard;

impl GlyphClipboard for BrokenClipboard {
    fn get_text(&mut self) -> Result<String, GlyphClipboardError> {
        Err(GlyphClipboardError::ClipboardGetFailed("unavailable".to_string()))
    }

    fn set_text(&mut self, _text: String) -> Result<(), GlyphClipboardError> {
        Err(GlyphClipboardError::ClipboardSetFailed("unavailable".to_string()))
    }
}

#[test]
fn test_copy_writes_literal() {
    let mut state = create_state_with_cells(&[(0, 0), (7, 7)], BitOrder::LsbTop);
    let mut clipboard = MemoryClipboard::new();

    state.copy_to_clipboard(&mut clipboard).unwrap();
    assert_eq!(Some("{ 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80 }"), clipboard.text());
}

#[test]
fn test_copy_marks_clean() {
    let mut state = GlyphEditState::new();
    state.toggle_cell(1, 1);
    assert!(state.is_dirty());

    state.copy_to_clipboard(&mut MemoryClipboard::new()).unwrap();
    assert!(!state.is_dirty());
}

#[test]
fn test_copy_then_paste_into_other_session() {
    let mut source = GlyphEditState::from_grid(create_frame(), BitOrder::MsbTop);
    let mut clipboard = MemoryClipboard::new();
    source.copy_to_clipboard(&mut clipboard).unwrap();

    let mut target = GlyphEditState::with_bit_order(BitOrder::MsbTop);
    target.paste_from_clipboard(&mut clipboard).unwrap();
    assert_eq!(source.grid(), target.grid());
}

#[test]
fn test_paste_rejects_bad_text() {
    let mut state = create_state_with_cells(&[(3, 3)], BitOrder::LsbTop);
    let before = *state.grid();
    let mut clipboard = MemoryClipboard::with_text("hello");

    let result = state.paste_from_clipboard(&mut clipboard);
    assert_eq!(Err(PasteError::Format(EngineError::ByteCount { expected: 8, actual: 0 })), result);
    assert_eq!(before, *state.grid());
}

#[test]
fn test_paste_from_empty_clipboard() {
    let mut state = GlyphEditState::new();
    let result = state.paste_from_clipboard(&mut MemoryClipboard::new());
    assert_eq!(Err(PasteError::Clipboard(GlyphClipboardError::NoText)), result);
}

#[test]
fn test_clipboard_failures_propagate() {
    let mut state = create_state_with_cells(&[(3, 3)], BitOrder::LsbTop);
    assert!(state.copy_to_clipboard(&mut BrokenClipboard).is_err());
    assert!(matches!(state.paste_from_clipboard(&mut BrokenClipboard), Err(PasteError::Clipboard(_))));
    assert_eq!(Some(true), state.grid().get(3, 3));
}
