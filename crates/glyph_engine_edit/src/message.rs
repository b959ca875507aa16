//! Messages the front-end sends to the editor and what comes back
//!
//! Every UI event (cell click, button press, text edit) becomes one
//! [`EditorMessage`]. [`crate::GlyphEditState::update`] applies it and returns
//! an [`EditorResponse`] telling the UI whether to redraw and whether to show
//! a message box.

use glyph_engine::{BitOrder, EngineError};

use crate::clipboard::GlyphClipboardError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMessage {
    /// Toggle the cell at grid coordinates
    ToggleCell { x: usize, y: usize },
    /// Click on the grid canvas at pixel coordinates
    Click { px: i32, py: i32 },
    RotateRight,
    Clear,
    CopyToClipboard,
    PasteFromClipboard,
    /// The user edited the text panel
    SetText(String),
    /// Parse the text panel back into the grid
    LoadFromText,
    SetBitOrder(BitOrder),
}

/// Blocking notification shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The literal was copied to the clipboard
    Copied,
    /// Clipboard text could not be imported
    PasteFailed(PasteError),
    /// Text panel content could not be imported
    InvalidText(EngineError),
    /// Writing the clipboard failed
    CopyFailed(GlyphClipboardError),
}

impl Notification {
    pub fn is_error(&self) -> bool {
        !matches!(self, Notification::Copied)
    }
}

/// Why a paste did not change the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteError {
    Clipboard(GlyphClipboardError),
    Format(EngineError),
}

impl std::fmt::Display for PasteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasteError::Clipboard(err) => write!(f, "{err}"),
            PasteError::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PasteError {}

impl From<GlyphClipboardError> for PasteError {
    fn from(err: GlyphClipboardError) -> Self {
        PasteError::Clipboard(err)
    }
}

impl From<EngineError> for PasteError {
    fn from(err: EngineError) -> Self {
        PasteError::Format(err)
    }
}

/// Outcome of a handled [`EditorMessage`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorResponse {
    /// The grid or text panel changed and needs to be rendered again
    pub redraw: bool,
    pub notification: Option<Notification>,
}

impl EditorResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            notification: None,
        }
    }

    pub fn notify(notification: Notification) -> Self {
        Self {
            redraw: false,
            notification: Some(notification),
        }
    }
}
