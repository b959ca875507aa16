//! Grid codec
//!
//! Packs a [`Grid`] into one byte per column and unpacks it again. Both
//! directions share a single [`BitOrder`] so `decode(encode(g))` is always `g`.

use serde::{Deserialize, Serialize};

use crate::{ByteArray, EngineError, Grid, Result, GRID_SIZE};

/// Which grid row lands in bit 0 of a column byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitOrder {
    /// Row 0 is the least significant bit (row `y` is bit `y`)
    #[default]
    LsbTop,
    /// Row 0 is the most significant bit (row `y` is bit `7 - y`)
    MsbTop,
}

impl BitOrder {
    /// Bit position of row `y`
    pub fn shift(self, y: usize) -> usize {
        match self {
            BitOrder::LsbTop => y,
            BitOrder::MsbTop => GRID_SIZE - 1 - y,
        }
    }
}

impl std::fmt::Display for BitOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitOrder::LsbTop => write!(f, "lsb-top"),
            BitOrder::MsbTop => write!(f, "msb-top"),
        }
    }
}

/// Pack each column into a byte
pub fn encode(grid: &Grid, order: BitOrder) -> ByteArray {
    let mut result = [0u8; GRID_SIZE];
    for (y, row) in grid.rows().iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell {
                result[x] |= 1 << order.shift(y);
            }
        }
    }
    result
}

/// Unpack column bytes into a grid.
///
/// Fails if `bytes` does not hold exactly [`GRID_SIZE`] bytes.
pub fn decode(bytes: &[u8], order: BitOrder) -> Result<Grid> {
    if bytes.len() != GRID_SIZE {
        return Err(EngineError::ByteCount {
            expected: GRID_SIZE,
            actual: bytes.len(),
        });
    }

    let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
    for (x, &byte) in bytes.iter().enumerate() {
        for (y, row) in cells.iter_mut().enumerate() {
            row[x] = (byte >> order.shift(y)) & 1 == 1;
        }
    }
    Ok(Grid::from_rows(cells))
}
