//! Column report shown in the editor's text panel

use std::fmt::Write;

use crate::literal::format_literal;

/// One line per column (`<label> 3: 00011000  -> ...`), a blank line and the literal.
///
/// The binary string is printed most significant bit first; the visual
/// column uses `█` for set bits.
pub fn column_report(bytes: &[u8], column_label: &str) -> String {
    let mut result = String::new();
    for (i, byte) in bytes.iter().enumerate() {
        let bits = format!("{byte:08b}");
        let visual: String = bits.chars().map(|c| if c == '1' { '█' } else { ' ' }).collect();
        let _ = writeln!(result, "{column_label} {i}: {bits}  -> {visual}");
    }
    result.push('\n');
    result.push_str(&format_literal(bytes));
    result
}
