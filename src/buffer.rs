//! Text-editing collaborator consumed by the date field controller.
//!
//! The controller owns no editing logic: it reads the buffer around the
//! cursor, asks the acceptance policy about prospective content, and writes
//! accepted text back through this narrow interface. `LineBuffer` is the
//! plain single-line implementation shipped with the crate; any richer
//! editing primitive can stand in by implementing `TextBuffer`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::ops::Range;

/// The narrow read/write surface the date field requires from its text
/// editing primitive. Positions and ranges are in characters, not bytes.
pub trait TextBuffer {
    /// Full buffer content
    fn text(&self) -> String;

    /// Content strictly before the insertion cursor
    fn text_before_cursor(&self) -> String;

    /// Content at and after the insertion cursor
    fn text_after_cursor(&self) -> String;

    /// Number of characters in the buffer
    fn char_count(&self) -> usize;

    /// Current cursor position in characters
    fn cursor(&self) -> usize;

    /// Moves the cursor, clamped to the buffer length
    fn set_cursor(&mut self, position: usize);

    /// Replaces `range` with `replacement` and leaves the cursor at the end
    /// of the replacement
    fn replace(&mut self, range: Range<usize>, replacement: &str);

    /// Current clipboard content
    fn clipboard_text(&self) -> String;

    /// Handles an editing key the field controller does not interpret
    /// itself (backspace, delete, cursor movement). Returns true when the
    /// event was consumed.
    fn handle_key(&mut self, event: &KeyEvent) -> bool;
}

/// A single-line text buffer with a character cursor and an internal
/// clipboard register.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
    clipboard: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clipboard register consulted by `clipboard_text`
    pub fn set_clipboard(&mut self, text: impl Into<String>) {
        self.clipboard = text.into();
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.replace(self.cursor - 1..self.cursor, "");
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let cursor = self.cursor;
            self.replace(cursor..cursor + 1, "");
        }
    }
}

impl TextBuffer for LineBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn text_before_cursor(&self) -> String {
        self.text[..self.byte_offset(self.cursor)].to_owned()
    }

    fn text_after_cursor(&self) -> String {
        self.text[self.byte_offset(self.cursor)..].to_owned()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.char_count());
    }

    fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let start = range.start.min(self.char_count());
        let end = range.end.clamp(start, self.char_count());
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        self.text.replace_range(start_byte..end_byte, replacement);
        self.cursor = start + replacement.chars().count();
    }

    fn clipboard_text(&self) -> String {
        self.clipboard.clone()
    }

    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match event.code {
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            _ => return false,
        }
        true
    }
}
