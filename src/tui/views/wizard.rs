//! Setup wizard view

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::header::Header;
use crate::tui::layout::ScreenLayout;
use crate::tui::theme::Theme;
use crate::wizards::setup::Wizard;

use super::Breadcrumb;

/// Render the wizard: header with progress, active screen, key hints
pub fn render_wizard(frame: &mut Frame, wizard: &Wizard, theme: &Theme) {
    let area = frame.size();
    let step = wizard.step();

    let header = Header::new(Breadcrumb::new().push("Setup").push(step.title()), theme)
        .with_progress(wizard.progress());
    let areas = ScreenLayout::new(area).with_header(header).render(frame);

    let body = Paragraph::new(wizard.render(theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focused))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );
    frame.render_widget(body, areas.content);

    if let Some(footer_area) = areas.footer {
        let footer = Paragraph::new(wizard.hints())
            .style(Style::default().fg(theme.text_muted))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, footer_area);
    }
}
