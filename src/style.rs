//! Visual configuration for a date field.
//!
//! Styling is an explicit value passed in at construction, not a
//! process-wide table; call sites layer overrides on top of `default()`.

use crossterm::style::{Color, ContentStyle};

/// Styles for the three text regions a field host renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    /// Label shown before the input area
    pub label: ContentStyle,
    /// Input area text
    pub text: ContentStyle,
    /// Placeholder shown while the input area is empty
    pub placeholder: ContentStyle,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            label: ContentStyle::new(),
            text: ContentStyle {
                foreground_color: Some(Color::White),
                background_color: Some(Color::Blue),
                ..ContentStyle::new()
            },
            placeholder: ContentStyle {
                foreground_color: Some(Color::DarkCyan),
                background_color: Some(Color::Blue),
                ..ContentStyle::new()
            },
        }
    }
}
