//! Confirmation prompt component
//!
//! The same Yes/No prompt is used inline inside wizard screens and as a standalone
//! dialog.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::confirm::ConfirmChoice;
use crate::tui::theme::Theme;

/// Lines of a Yes/No prompt with the current choice highlighted
///
/// Yes is drawn in the affirmative color, No in the negative one; the selected
/// option is reversed.
pub fn confirm_lines(prompt: &str, choice: ConfirmChoice, theme: &Theme) -> Vec<Line<'static>> {
    let option = |label: &'static str, selected: bool, color: Color| {
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(format!(" {} ", label), style)
    };

    vec![
        Line::from(vec![
            Span::styled("⚠  ", Style::default().fg(theme.border_warning)),
            Span::styled(prompt.to_string(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::raw("   "),
            option("Yes", choice == ConfirmChoice::Yes, theme.confirm_yes),
            Span::raw("  "),
            option("No", choice == ConfirmChoice::No, theme.confirm_no),
        ]),
        Line::from(Span::styled(
            "   ←/→ or y/n to choose, Enter to confirm, Esc to cancel",
            Style::default().fg(theme.text_muted),
        )),
    ]
}

/// Render a bordered confirmation dialog
pub fn render_confirm_dialog(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    prompt: &str,
    choice: ConfirmChoice,
    theme: &Theme,
) {
    let mut lines = vec![Line::from("")];
    lines.extend(confirm_lines(prompt, choice, theme));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_warning))
            .title(title.to_string()),
    );
    frame.render_widget(paragraph, area);
}
