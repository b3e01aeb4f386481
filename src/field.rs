//! The date field controller.
//!
//! Orchestrates keystroke and paste events: auto-separator insertion first,
//! then the acceptance policy, then a write through the text buffer. The
//! controller owns no validation logic itself; rejection is silent and
//! leaves the buffer untouched.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::CalendarDate;
use crate::acceptor::{AcceptorFn, date_acceptor};
use crate::buffer::{LineBuffer, TextBuffer};
use crate::consts::{FIELD_WIDTH, SEPARATOR, SEPARATOR_OFFSETS};
use crate::style::FieldStyle;

/// Key that ended text entry. Reported to the done and finished
/// subscribers so a hosting form can confirm, cancel, or move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoneKey {
    /// Confirm the entered date
    Enter,
    /// Abort text input
    Escape,
    /// Move to the next form item
    Tab,
    /// Move to the previous form item
    BackTab,
}

/// A fixed-layout `YYYY-MM-DD` input field over a text-editing buffer.
///
/// Characters that cannot lead to a valid date are dropped silently;
/// separators are spliced in automatically when digit entry crosses a
/// segment boundary. The buffer type defaults to the crate's own
/// [`LineBuffer`] but any [`TextBuffer`] implementation may be used.
pub struct DateField<B = LineBuffer> {
    buffer: B,
    style: FieldStyle,
    label: String,
    placeholder: String,
    disabled: bool,
    accept: Box<AcceptorFn>,
    changed: Option<Box<dyn FnMut(&str)>>,
    done: Option<Box<dyn FnMut(DoneKey)>>,
    finished: Option<Box<dyn FnMut(Option<DoneKey>)>>,
}

impl DateField<LineBuffer> {
    pub fn new() -> Self {
        Self::with_buffer(LineBuffer::new())
    }
}

impl Default for DateField<LineBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TextBuffer> DateField<B> {
    /// Builds a field over an existing text-editing primitive.
    pub fn with_buffer(buffer: B) -> Self {
        Self {
            buffer,
            style: FieldStyle::default(),
            label: String::new(),
            placeholder: String::new(),
            disabled: false,
            accept: Box::new(date_acceptor),
            changed: None,
            done: None,
            finished: None,
        }
    }

    /// Current buffer content
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Replaces the entire buffer with the formatted date. Programmatic
    /// writes bypass the acceptance policy and fire the change
    /// notification.
    pub fn set_date(&mut self, date: CalendarDate) {
        let formatted = date.to_string();
        let length = self.buffer.char_count();
        self.buffer.replace(0..length, &formatted);
        self.fire_changed();
    }

    /// Parses the current buffer content as a date. Returns `None` for an
    /// empty, incomplete, or calendar-invalid buffer; callers that need to
    /// tell "empty" from "invalid" must inspect `text()` separately.
    pub fn date(&self) -> Option<CalendarDate> {
        self.buffer.text().parse().ok()
    }

    /// Replaces the acceptance policy.
    pub fn set_acceptor(&mut self, accept: impl Fn(&str, Option<char>) -> bool + 'static) {
        self.accept = Box::new(accept);
    }

    /// Subscribes to buffer changes; receives the text after the change.
    pub fn set_changed_fn(&mut self, handler: impl FnMut(&str) + 'static) {
        self.changed = Some(Box::new(handler));
    }

    /// Subscribes to the terminal key events (enter, escape, tab, backtab).
    pub fn set_done_fn(&mut self, handler: impl FnMut(DoneKey) + 'static) {
        self.done = Some(Box::new(handler));
    }

    /// Subscribes to "user left this field" events for form integration.
    /// `None` is reported when the field is disabled rather than left via a
    /// key.
    pub fn set_finished_fn(&mut self, handler: impl FnMut(Option<DoneKey>) + 'static) {
        self.finished = Some(Box::new(handler));
    }

    /// Enables or disables the field. A disabled field ignores all input;
    /// the finished subscriber is notified synchronously so a hosting form
    /// can move focus away.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if let Some(finished) = self.finished.as_mut() {
            finished(None);
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Screen width of the input area in cells
    pub const fn field_width(&self) -> u16 {
        FIELD_WIDTH
    }

    /// Processes one key event. Terminal keys fire the done/finished
    /// subscribers, Ctrl-V runs the clipboard through the paste path,
    /// plain characters go through auto-separator insertion and the
    /// acceptance policy, and anything else is forwarded to the buffer.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if self.disabled || event.kind == KeyEventKind::Release {
            return;
        }
        match event.code {
            KeyCode::Enter => self.finish(DoneKey::Enter),
            KeyCode::Esc => self.finish(DoneKey::Escape),
            KeyCode::Tab => self.finish(DoneKey::Tab),
            KeyCode::BackTab => self.finish(DoneKey::BackTab),
            KeyCode::Char('v') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                let blob = self.buffer.clipboard_text();
                self.insert_blob(&blob);
            }
            KeyCode::Char(ch) if !event.modifiers.contains(KeyModifiers::ALT) => {
                self.on_character(ch);
            }
            _ => self.forward(event),
        }
    }

    /// Evaluates pasted text (bracketed paste) against the acceptance
    /// policy in one step, using the no-character sentinel.
    pub fn handle_paste(&mut self, blob: &str) {
        if self.disabled {
            return;
        }
        self.insert_blob(blob);
    }

    fn on_character(&mut self, ch: char) {
        if !ch.is_ascii_digit() && ch != SEPARATOR {
            return;
        }

        // Boundary crossing: splice the separator before evaluating the
        // keystroke. Skipped when the user typed the separator themselves,
        // otherwise the policy would see a shifted buffer and admit a
        // second one. Only fires with nothing after the cursor: the splice
        // serves continuous digit entry, and mid-buffer it would mutate the
        // buffer even when the keystroke itself is then rejected.
        let prefix_length = self.buffer.text_before_cursor().chars().count();
        if ch != SEPARATOR
            && SEPARATOR_OFFSETS.contains(&prefix_length)
            && self.buffer.text_after_cursor().is_empty()
        {
            self.insert_at_cursor(SEPARATOR);
        }

        let candidate = format!(
            "{}{ch}{}",
            self.buffer.text_before_cursor(),
            self.buffer.text_after_cursor()
        );
        if (self.accept)(&candidate, Some(ch)) {
            self.insert_at_cursor(ch);
        }
    }

    fn insert_blob(&mut self, blob: &str) {
        let candidate = format!(
            "{}{blob}{}",
            self.buffer.text_before_cursor(),
            self.buffer.text_after_cursor()
        );
        if !(self.accept)(&candidate, None) {
            return;
        }
        let cursor = self.buffer.cursor();
        self.buffer.replace(cursor..cursor, blob);
        self.fire_changed();
    }

    fn insert_at_cursor(&mut self, ch: char) {
        let cursor = self.buffer.cursor();
        self.buffer.replace(cursor..cursor, &ch.to_string());
        self.fire_changed();
    }

    fn forward(&mut self, event: &KeyEvent) {
        let before = self.buffer.text();
        if self.buffer.handle_key(event) && self.buffer.text() != before {
            self.fire_changed();
        }
    }

    fn fire_changed(&mut self) {
        let text = self.buffer.text();
        if let Some(changed) = self.changed.as_mut() {
            changed(&text);
        }
    }

    fn finish(&mut self, key: DoneKey) {
        if let Some(done) = self.done.as_mut() {
            done(key);
        }
        if let Some(finished) = self.finished.as_mut() {
            finished(Some(key));
        }
    }
}
