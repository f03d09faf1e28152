//! Completion screen: report where the configuration went, or why it did not

use std::path::PathBuf;

use ratatui::text::{Line, Span, Text};

use crate::input::Key;
use crate::tui::theme::Theme;

use super::super::screen::{heading, Effect, Nav, Outcome, Screen};
use super::super::step::WizardStep;

/// Final step
#[derive(Debug, Clone)]
pub struct CompleteScreen {
    location: PathBuf,
    error: Option<String>,
    nav: Nav,
}

impl CompleteScreen {
    /// Configuration was written to `location`
    pub fn saved(location: PathBuf) -> Self {
        Self {
            location,
            error: None,
            nav: Nav::default(),
        }
    }

    /// Writing to `location` failed with `error`
    pub fn failed(location: PathBuf, error: String) -> Self {
        Self {
            location,
            error: Some(error),
            nav: Nav::default(),
        }
    }
}

impl Screen for CompleteScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Complete
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        if matches!(key, Key::Enter | Key::Esc | Key::Space) {
            self.nav.request(Outcome::Continue);
        }
        None
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let mut lines;
        match &self.error {
            None => {
                lines = heading("Setup complete", "gitwise is ready to use.", theme);
                lines.push(Line::from(vec![
                    Span::styled("✓ Configuration saved to ", theme.success_style()),
                    Span::styled(self.location.display().to_string(), theme.text_style()),
                ]));
            }
            Some(error) => {
                lines = heading(
                    "Setup finished with errors",
                    "Your settings could not be saved.",
                    theme,
                );
                lines.push(Line::from(Span::styled(
                    format!("✗ {}", error),
                    theme.error_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("Run gitwise again to retry writing {}", self.location.display()),
                    theme.muted_style(),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press enter to exit",
            theme.muted_style(),
        )));
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        "enter exit"
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn nav(&self) -> &Nav {
        &self.nav
    }

    fn nav_mut(&mut self) -> &mut Nav {
        &mut self.nav
    }
}
