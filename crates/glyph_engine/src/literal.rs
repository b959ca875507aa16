//! `{ 0xHH, 0xHH, ... }` byte array literals
//!
//! This is the clipboard format and what ends up pasted into firmware
//! sources. Parsing is lenient about the surrounding text: every `0xHH` token
//! counts, everything else is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ByteArray, EngineError, Result, GRID_SIZE};

static HEX_BYTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"0x([0-9A-Fa-f]{2})").unwrap());

/// Format bytes as `{ 0x01, 0xFF, ... }`
pub fn format_literal(bytes: &[u8]) -> String {
    let body = bytes.iter().map(|b| format!("0x{b:02X}")).collect::<Vec<_>>().join(", ");
    format!("{{ {body} }}")
}

/// Extract exactly [`GRID_SIZE`] hex bytes from `text`
pub fn parse_literal(text: &str) -> Result<ByteArray> {
    let tokens: Vec<&str> = HEX_BYTE.captures_iter(text).filter_map(|c| c.get(1)).map(|m| m.as_str()).collect();
    if tokens.len() != GRID_SIZE {
        return Err(EngineError::ByteCount {
            expected: GRID_SIZE,
            actual: tokens.len(),
        });
    }

    // tokens are exactly two hex digits, so every one fits a byte
    let mut result = [0u8; GRID_SIZE];
    for (slot, token) in result.iter_mut().zip(tokens) {
        *slot = token.chars().filter_map(|c| c.to_digit(16)).fold(0, |byte, digit| (byte << 4) | digit as u8);
    }
    Ok(result)
}
