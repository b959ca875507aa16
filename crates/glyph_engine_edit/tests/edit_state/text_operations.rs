//! Literal export/import and the text panel

use glyph_engine_edit::{BitOrder, EngineError, GlyphEditState};
use pretty_assertions::assert_eq;

use super::helpers::{create_frame, create_state_with_cells};

const SINGLE_BIT: &str = "{ 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 }";

#[test]
fn test_import_single_bit_lsb_top() {
    let mut state = GlyphEditState::new();
    state.import_literal(SINGLE_BIT).unwrap();
    assert_eq!(1, state.grid().count_set());
    assert_eq!(Some(true), state.grid().get(0, 0));
}

#[test]
fn test_import_single_bit_msb_top() {
    let mut state = GlyphEditState::with_bit_order(BitOrder::MsbTop);
    state.import_literal(SINGLE_BIT).unwrap();
    assert_eq!(1, state.grid().count_set());
    assert_eq!(Some(true), state.grid().get(0, 7));
}

#[test]
fn test_export_then_import_restores_grid() {
    for order in [BitOrder::LsbTop, BitOrder::MsbTop] {
        let source = GlyphEditState::from_grid(create_frame(), order);
        let literal = source.export_literal();

        let mut target = GlyphEditState::with_bit_order(order);
        target.import_literal(&literal).unwrap();
        assert_eq!(source.grid(), target.grid());
        assert_eq!(literal, target.export_literal());
    }
}

#[test]
fn test_import_seven_tokens_rejected() {
    let mut state = create_state_with_cells(&[(2, 3)], BitOrder::LsbTop);
    let before = *state.grid();

    let result = state.import_literal("{ 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07 }");
    assert_eq!(Err(EngineError::ByteCount { expected: 8, actual: 7 }), result);
    assert_eq!(before, *state.grid());
}

#[test]
fn test_import_nine_tokens_rejected() {
    let mut state = create_state_with_cells(&[(2, 3)], BitOrder::LsbTop);
    let before = *state.grid();
    let text_before = state.text().to_string();

    let result = state.import_literal("{ 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09 }");
    assert_eq!(Err(EngineError::ByteCount { expected: 8, actual: 9 }), result);
    assert_eq!(before, *state.grid());
    assert_eq!(text_before, state.text());
}

#[test]
fn test_load_from_generated_text() {
    // the whole column report parses back: the binary lines contain no 0x tokens
    let mut state = GlyphEditState::from_grid(create_frame(), BitOrder::LsbTop);
    let frame = *state.grid();
    state.load_from_text().unwrap();
    assert_eq!(frame, *state.grid());
}

#[test]
fn test_load_from_edited_text() {
    let mut state = GlyphEditState::new();
    state.set_text("const ARROW: [u8; 8] = { 0x08, 0x0C, 0xFE, 0xFF, 0xFE, 0x0C, 0x08, 0x00 };");
    state.load_from_text().unwrap();

    assert_eq!(&[0x08, 0x0C, 0xFE, 0xFF, 0xFE, 0x0C, 0x08, 0x00], state.bytes());
    // text panel is regenerated after a successful load
    assert!(state.text().starts_with("Column 0: 00001000"));
}

#[test]
fn test_load_from_broken_text_keeps_grid_and_text() {
    let mut state = create_state_with_cells(&[(4, 4)], BitOrder::LsbTop);
    let before = *state.grid();
    state.set_text("{ 0x1, 0x2 }");

    assert!(state.load_from_text().is_err());
    assert_eq!(before, *state.grid());
    assert_eq!("{ 0x1, 0x2 }", state.text());
}
