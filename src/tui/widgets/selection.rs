//! Helper functions for consistent focus rendering across all form widgets.
//!
//! Focused rows get an arrow prefix and bold text in the theme's focus color. No
//! background highlighting is used.

use ratatui::style::{Color, Modifier, Style, Stylize};

use crate::tui::theme::Theme;

/// Returns the focus prefix for a form row.
///
/// Focused rows get an arrow (`▶ `), unfocused rows get two spaces for alignment.
pub fn selection_prefix(is_selected: bool) -> &'static str {
    if is_selected {
        "▶ "
    } else {
        "  "
    }
}

/// Returns a style for a selected/unselected item with a custom color.
///
/// Selected items are bold with the specified color. Unselected items use the same color
/// but without bold.
pub fn selection_style(is_selected: bool, base_color: Color) -> Style {
    if is_selected {
        Style::default().fg(base_color).bold()
    } else {
        Style::default().fg(base_color)
    }
}

/// Returns a style for an item name with selection styling.
pub fn selection_name_style(is_selected: bool, theme: &Theme) -> Style {
    Style::default()
        .fg(if is_selected {
            theme.focused
        } else {
            theme.text
        })
        .add_modifier(if is_selected {
            Modifier::BOLD
        } else {
            Modifier::empty()
        })
}

/// Marker for a checkbox-like item
pub fn check_marker(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Marker for a radio-like option
pub fn radio_marker(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}
