#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
//! Model layer for 8×8 monochrome glyph editing.
//!
//! - [`Grid`] - the fixed size bit matrix
//! - [`codec`] - packing a grid into one byte per column and back
//! - [`literal`] - the `{ 0xHH, ... }` text form used in firmware sources
//! - [`report`] - the per column text dump shown next to the editor

/// Width and height of every glyph.
pub const GRID_SIZE: usize = 8;

/// One byte per grid column.
pub type ByteArray = [u8; GRID_SIZE];

mod error;
pub use error::*;

mod grid;
pub use grid::*;

pub mod codec;
pub use codec::{decode, encode, BitOrder};

pub mod literal;
pub use literal::{format_literal, parse_literal};

pub mod report;
pub use report::column_report;
