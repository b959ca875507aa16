//! Clipboard access for the glyph editor
//!
//! The clipboard carries the plain text literal (`{ 0x.., ... }`) so it can
//! be pasted straight into source code. [`SystemClipboard`] talks to the OS
//! clipboard, [`MemoryClipboard`] keeps the text in process.

use clipboard_rs::{Clipboard, ClipboardContext};

/// Error type for clipboard operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphClipboardError {
    /// Failed to create clipboard context
    ClipboardContextFailed(String),
    /// Failed to set clipboard contents
    ClipboardSetFailed(String),
    /// Failed to get clipboard contents
    ClipboardGetFailed(String),
    /// Clipboard doesn't contain any text
    NoText,
}

impl std::fmt::Display for GlyphClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphClipboardError::ClipboardContextFailed(msg) => write!(f, "Failed to create clipboard context: {}", msg),
            GlyphClipboardError::ClipboardSetFailed(msg) => write!(f, "Failed to set clipboard: {}", msg),
            GlyphClipboardError::ClipboardGetFailed(msg) => write!(f, "Failed to get clipboard: {}", msg),
            GlyphClipboardError::NoText => write!(f, "Clipboard doesn't contain text"),
        }
    }
}

impl std::error::Error for GlyphClipboardError {}

/// Text clipboard used by [`crate::GlyphEditState`]
pub trait GlyphClipboard {
    fn get_text(&mut self) -> Result<String, GlyphClipboardError>;

    fn set_text(&mut self, text: String) -> Result<(), GlyphClipboardError>;
}

impl<T: GlyphClipboard + ?Sized> GlyphClipboard for Box<T> {
    fn get_text(&mut self) -> Result<String, GlyphClipboardError> {
        (**self).get_text()
    }

    fn set_text(&mut self, text: String) -> Result<(), GlyphClipboardError> {
        (**self).set_text(text)
    }
}

/// The operating system clipboard
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, GlyphClipboardError> {
        let ctx = ClipboardContext::new().map_err(|e| GlyphClipboardError::ClipboardContextFailed(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl GlyphClipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, GlyphClipboardError> {
        self.ctx.get_text().map_err(|e| GlyphClipboardError::ClipboardGetFailed(e.to_string()))
    }

    fn set_text(&mut self, text: String) -> Result<(), GlyphClipboardError> {
        self.ctx.set_text(text).map_err(|e| GlyphClipboardError::ClipboardSetFailed(e.to_string()))
    }
}

/// In-process clipboard, used when no system clipboard is available
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl GlyphClipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, GlyphClipboardError> {
        self.text.clone().ok_or(GlyphClipboardError::NoText)
    }

    fn set_text(&mut self, text: String) -> Result<(), GlyphClipboardError> {
        self.text = Some(text);
        Ok(())
    }
}
