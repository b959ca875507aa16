//! Cell toggling, click mapping, rotation and clearing

use glyph_engine_edit::{BitOrder, GlyphEditState, Grid, GRID_SIZE};
use pretty_assertions::assert_eq;

use super::helpers::{create_frame, create_state_with_cells, literal_line};

#[test]
fn test_new_state_is_empty() {
    let state = GlyphEditState::new();
    assert!(state.grid().is_empty());
    assert_eq!(&[0u8; GRID_SIZE], state.bytes());
    assert_eq!("{ 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 }", literal_line(&state));
    assert!(!state.is_dirty());
}

#[test]
fn test_toggle_updates_bytes_and_text() {
    let mut state = GlyphEditState::new();

    assert!(state.toggle_cell(0, 0));
    assert_eq!(0x01, state.bytes()[0]);
    assert_eq!("{ 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 }", literal_line(&state));
    assert!(state.text().starts_with("Column 0: 00000001"));
    assert!(state.is_dirty());

    assert!(state.toggle_cell(0, 0));
    assert_eq!(0x00, state.bytes()[0]);
}

#[test]
fn test_toggle_outside_grid_is_ignored() {
    let mut state = create_state_with_cells(&[(1, 1)], BitOrder::LsbTop);
    let before = *state.grid();

    assert!(!state.toggle_cell(GRID_SIZE, 0));
    assert!(!state.toggle_cell(0, GRID_SIZE));
    assert_eq!(before, *state.grid());
    assert!(!state.is_dirty());
}

#[test]
fn test_cell_at_maps_pixels() {
    assert_eq!(Some((0, 0)), GlyphEditState::cell_at(0, 0, 40));
    assert_eq!(Some((0, 0)), GlyphEditState::cell_at(39, 39, 40));
    assert_eq!(Some((1, 2)), GlyphEditState::cell_at(40, 80, 40));
    assert_eq!(Some((7, 7)), GlyphEditState::cell_at(319, 319, 40));
    assert_eq!(None, GlyphEditState::cell_at(320, 0, 40));
    assert_eq!(None, GlyphEditState::cell_at(-1, 10, 40));
    assert_eq!(None, GlyphEditState::cell_at(10, 10, 0));
}

#[test]
fn test_click_toggles_cell_under_pointer() {
    let mut state = GlyphEditState::new();
    assert!(state.click(125, 45, 40));
    assert_eq!(Some(true), state.grid().get(3, 1));
    assert!(!state.click(500, 45, 40));
    assert_eq!(1, state.grid().count_set());
}

#[test]
fn test_rotate_right() {
    let mut state = create_state_with_cells(&[(0, 0)], BitOrder::LsbTop);
    state.rotate_right();
    assert_eq!(Some(true), state.grid().get(GRID_SIZE - 1, 0));
    assert_eq!(0x01, state.bytes()[GRID_SIZE - 1]);
    assert_eq!(0x00, state.bytes()[0]);
}

#[test]
fn test_rotate_four_times_restores() {
    let frame = create_frame();
    let mut state = create_state_with_cells(&[(1, 2), (5, 6), (2, 2)], BitOrder::MsbTop);
    let original = *state.grid();
    let original_bytes = *state.bytes();

    for _ in 0..4 {
        state.rotate_right();
    }
    assert_eq!(original, *state.grid());
    assert_eq!(original_bytes, *state.bytes());

    // a symmetric glyph is unchanged by a single rotation
    let mut state = GlyphEditState::from_grid(frame, BitOrder::LsbTop);
    state.rotate_right();
    assert_eq!(frame, *state.grid());
}

#[test]
fn test_clear() {
    let mut state = GlyphEditState::from_grid(Grid::filled(), BitOrder::LsbTop);
    assert_eq!(&[0xFFu8; GRID_SIZE], state.bytes());

    state.clear();
    assert!(state.grid().is_empty());
    assert_eq!(&[0u8; GRID_SIZE], state.bytes());
}

#[test]
fn test_switch_bit_order_keeps_grid() {
    let mut state = create_state_with_cells(&[(0, 0)], BitOrder::LsbTop);
    state.set_bit_order(BitOrder::MsbTop);
    assert_eq!(Some(true), state.grid().get(0, 0));
    assert_eq!(0x80, state.bytes()[0]);
    assert_eq!("{ 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00 }", literal_line(&state));
}

#[test]
fn test_column_label() {
    let mut state = GlyphEditState::new();
    state.set_column_label("Столбец");
    assert!(state.text().starts_with("Столбец 0: 00000000"));
}
