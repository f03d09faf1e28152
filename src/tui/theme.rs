//! Theme module for centralized color and style definitions
//!
//! A [`Theme`] is constructed once by the application and passed by reference into
//! every render call. There is no global theme instance.

use ratatui::style::{Color, Modifier, Style};

/// Application theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // === UI Elements ===
    /// Primary accent color (headers, titles)
    pub accent: Color,
    /// Secondary accent color (step progress)
    pub accent_secondary: Color,
    /// Text color for normal content
    pub text: Color,
    /// Text color for muted/secondary content
    pub text_muted: Color,
    /// Color for the focused field
    pub focused: Color,
    /// Color for placeholder text in empty fields
    pub placeholder: Color,

    // === Form State ===
    /// Checked boxes and selected options
    pub checked: Color,
    /// Live preview text
    pub preview: Color,
    /// Validation and operation errors
    pub error: Color,
    /// Success/status messages
    pub success: Color,

    // === Confirmation ===
    /// Affirmative choice color
    pub confirm_yes: Color,
    /// Negative choice color
    pub confirm_no: Color,

    // === Borders ===
    /// Normal border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
    /// Warning border color (confirmation prompts)
    pub border_warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            accent_secondary: Color::Blue,
            text: Color::White,
            text_muted: Color::DarkGray,
            focused: Color::Cyan,
            placeholder: Color::DarkGray,

            checked: Color::Green,
            preview: Color::Yellow,
            error: Color::Red,
            success: Color::Green,

            confirm_yes: Color::Green,
            confirm_no: Color::Red,

            border: Color::White,
            border_focused: Color::Cyan,
            border_warning: Color::Yellow,
        }
    }

    /// Light theme for bright terminal backgrounds
    pub fn light() -> Self {
        Self {
            accent: Color::Blue,
            accent_secondary: Color::Magenta,
            text: Color::Black,
            text_muted: Color::Gray,
            focused: Color::Blue,
            placeholder: Color::Gray,
            preview: Color::Magenta,
            border: Color::Black,
            border_focused: Color::Blue,
            ..Self::dark()
        }
    }

    // === Style Builders ===

    /// Style for headers/titles
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for muted text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for plain text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for a field label, bold when the field holds focus
    pub fn label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focused).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Style for validation errors
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for status messages
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for preview text
    pub fn preview_style(&self) -> Style {
        Style::default().fg(self.preview)
    }
}
