//! Wizard header component
//!
//! Breadcrumb on the left, step progress right-aligned.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::theme::Theme;
use crate::tui::views::Breadcrumb;

/// Height constant for the header (including bottom border)
pub const HEADER_HEIGHT: u16 = 2;

/// Header shown above every wizard screen
pub struct Header<'a> {
    /// Breadcrumb navigation path
    breadcrumb: Breadcrumb,
    /// (1-based step, total steps)
    progress: Option<(usize, usize)>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(breadcrumb: Breadcrumb, theme: &'a Theme) -> Self {
        Self {
            breadcrumb,
            progress: None,
            theme,
        }
    }

    /// Show "Step i/n" plus a small bar on the right
    pub fn with_progress(mut self, progress: (usize, usize)) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Right-hand progress text, e.g. `Step 3/9 ■■■□□□□□□`
    fn progress_text(&self) -> String {
        match self.progress {
            Some((current, total)) if total > 0 => {
                let done = current.min(total);
                format!(
                    "Step {}/{} {}{}",
                    current,
                    total,
                    "■".repeat(done),
                    "□".repeat(total - done)
                )
            }
            _ => String::new(),
        }
    }

    /// Render the header to the given area
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let left_text = self.breadcrumb.display();
        let right_text = self.progress_text();

        let width = area.width as usize;
        let padding =
            width.saturating_sub(left_text.chars().count() + right_text.chars().count());

        let line = Line::from(vec![
            Span::styled(left_text, self.theme.header_style()),
            Span::raw(" ".repeat(padding)),
            Span::styled(right_text, Style::default().fg(self.theme.accent_secondary)),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(self.theme.border)),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text() {
        let theme = Theme::default();
        let header = Header::new(Breadcrumb::new(), &theme).with_progress((3, 9));
        assert_eq!(header.progress_text(), "Step 3/9 ■■■□□□□□□");
    }

    #[test]
    fn test_no_progress() {
        let theme = Theme::default();
        let header = Header::new(Breadcrumb::new().push("Setup"), &theme);
        assert!(header.progress_text().is_empty());
    }
}
