use std::fmt::Write;

use glyph_engine::{Grid, GRID_SIZE};

/// Draw the grid with column and row numbers
pub fn render_grid(grid: &Grid, on_char: char, off_char: char) -> String {
    let mut result = String::from("  ");
    for x in 0..GRID_SIZE {
        let _ = write!(result, " {x}");
    }
    result.push('\n');

    for (y, row) in grid.rows().iter().enumerate() {
        let _ = write!(result, "{y} ");
        for &cell in row {
            result.push(' ');
            result.push(if cell { on_char } else { off_char });
        }
        result.push('\n');
    }
    result
}
