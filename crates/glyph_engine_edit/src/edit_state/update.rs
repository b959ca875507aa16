use crate::clipboard::GlyphClipboard;
use crate::message::{EditorMessage, EditorResponse, Notification};
use crate::DEFAULT_CELL_SIZE;

use super::GlyphEditState;

impl GlyphEditState {
    /// Apply one UI event.
    ///
    /// Clicks are mapped with [`DEFAULT_CELL_SIZE`]; use [`GlyphEditState::update_with_cell_size`]
    /// for a differently sized canvas.
    pub fn update(&mut self, message: EditorMessage, clipboard: &mut dyn GlyphClipboard) -> EditorResponse {
        self.update_with_cell_size(message, clipboard, DEFAULT_CELL_SIZE)
    }

    pub fn update_with_cell_size(&mut self, message: EditorMessage, clipboard: &mut dyn GlyphClipboard, cell_size: i32) -> EditorResponse {
        match message {
            EditorMessage::ToggleCell { x, y } => {
                if self.toggle_cell(x, y) {
                    EditorResponse::redraw()
                } else {
                    EditorResponse::none()
                }
            }
            EditorMessage::Click { px, py } => {
                if self.click(px, py, cell_size) {
                    EditorResponse::redraw()
                } else {
                    EditorResponse::none()
                }
            }
            EditorMessage::RotateRight => {
                self.rotate_right();
                EditorResponse::redraw()
            }
            EditorMessage::Clear => {
                self.clear();
                EditorResponse::redraw()
            }
            EditorMessage::CopyToClipboard => match self.copy_to_clipboard(clipboard) {
                Ok(()) => EditorResponse::notify(Notification::Copied),
                Err(err) => {
                    log::error!("Copy failed: {err}");
                    EditorResponse::notify(Notification::CopyFailed(err))
                }
            },
            EditorMessage::PasteFromClipboard => match self.paste_from_clipboard(clipboard) {
                Ok(()) => EditorResponse::redraw(),
                Err(err) => EditorResponse::notify(Notification::PasteFailed(err)),
            },
            EditorMessage::SetText(text) => {
                self.set_text(text);
                EditorResponse::redraw()
            }
            EditorMessage::LoadFromText => match self.load_from_text() {
                Ok(()) => EditorResponse::redraw(),
                Err(err) => EditorResponse::notify(Notification::InvalidText(err)),
            },
            EditorMessage::SetBitOrder(order) => {
                self.set_bit_order(order);
                EditorResponse::redraw()
            }
        }
    }
}
