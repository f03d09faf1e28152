//! Pull request action view

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::pull_request::PullRequestPanel;
use crate::tui::theme::Theme;
use crate::tui::widgets::selection::{selection_name_style, selection_prefix};

use super::confirm::render_confirm_dialog;

/// Height of the confirmation dialog drawn under the list
const CONFIRM_HEIGHT: u16 = 6;

/// Render a pull request's actions, with the confirmation dialog when one is pending
pub fn render_pull_request(frame: &mut Frame, area: Rect, panel: &PullRequestPanel, theme: &Theme) {
    let view = panel.actions();
    let items: Vec<ListItem> = view
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == view.selected();
            if item.is_activatable() {
                let suffix = if item.requires_confirmation() { "…" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::raw(selection_prefix(selected)),
                    Span::styled(
                        format!("{}{}", item.label, suffix),
                        selection_name_style(selected, theme),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(Span::styled(
                    item.label.clone(),
                    theme.header_style(),
                )))
            }
        })
        .collect();

    let (list_area, confirm_area) = match (panel.confirm_prompt(), view.confirm().choice()) {
        (Some(prompt), Some(choice)) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(CONFIRM_HEIGHT)])
                .split(area);
            (chunks[0], Some((chunks[1], prompt, choice)))
        }
        _ => (area, None),
    };

    let title = format!("Pull request #{}", panel.pull_request().number);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title),
    );
    frame.render_widget(list, list_area);

    if let Some((confirm_area, prompt, choice)) = confirm_area {
        render_confirm_dialog(frame, confirm_area, "Confirm", &prompt, choice, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::pull_request::PullRequestSummary;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn panel() -> PullRequestPanel {
        PullRequestPanel::new(PullRequestSummary {
            number: 7,
            title: "Fix flaky test".to_string(),
            author: "hubot".to_string(),
            head_branch: "bugfix/flaky".to_string(),
            base_branch: "main".to_string(),
            url: "https://github.com/acme/app/pull/7".to_string(),
        })
    }

    fn draw(panel: &PullRequestPanel) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_pull_request(frame, area, panel, &theme)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_lists_actions() {
        let content = draw(&panel());
        assert!(content.contains("Pull request #7"));
        assert!(content.contains("Open in browser"));
        assert!(content.contains("Merge…"));
    }

    #[test]
    fn test_shows_pending_confirmation() {
        let mut panel = panel();
        panel.handle_key(Key::Up);
        panel.handle_key(Key::Enter);
        let content = draw(&panel);
        assert!(content.contains("Close pull request #7?"));
    }
}
