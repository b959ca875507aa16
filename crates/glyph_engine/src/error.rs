//! Unified error type for glyph_engine

use thiserror::Error;

/// Main error type for glyph_engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    // === Decoding Errors ===
    #[error("Expected {expected} bytes, found {actual}")]
    ByteCount { expected: usize, actual: usize },

    // === Editing Errors ===
    #[error("Cell ({x}, {y}) is outside the grid")]
    CellOutOfBounds { x: usize, y: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
