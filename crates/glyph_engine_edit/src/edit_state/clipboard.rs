//! Clipboard operations for the glyph editor
//!
//! The clipboard holds the literal text, the same format the text panel ends with.

use crate::clipboard::{GlyphClipboard, GlyphClipboardError};
use crate::message::PasteError;

use super::GlyphEditState;

impl GlyphEditState {
    /// Copy the byte array literal to the clipboard
    pub fn copy_to_clipboard(&mut self, clipboard: &mut dyn GlyphClipboard) -> Result<(), GlyphClipboardError> {
        let literal = self.export_literal();
        clipboard.set_text(literal)?;
        self.mark_clean();
        Ok(())
    }

    /// Import a literal from the clipboard
    pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn GlyphClipboard) -> Result<(), PasteError> {
        let text = clipboard.get_text()?;
        self.import_literal(&text)?;
        Ok(())
    }
}
