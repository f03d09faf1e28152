//! Welcome screen: start the wizard or skip it

use ratatui::text::{Line, Span, Text};

use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::widgets::Button;

use super::super::screen::{heading, Effect, FocusRing, Nav, Outcome, Screen};
use super::super::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Start,
    Skip,
}

const FIELDS: [Field; 2] = [Field::Start, Field::Skip];

/// First step of the wizard
#[derive(Debug, Clone)]
pub struct WelcomeScreen {
    start: Button,
    skip: Button,
    focus: FocusRing,
    nav: Nav,
}

impl Default for WelcomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            start: Button::new("Start setup"),
            skip: Button::new("Skip"),
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.sync_focus();
        screen
    }

    fn focused(&self) -> Option<Field> {
        self.focus.current(&FIELDS)
    }

    fn sync_focus(&mut self) {
        let focused = self.focused();
        self.start.set_focused(focused == Some(Field::Start));
        self.skip.set_focused(focused == Some(Field::Skip));
    }
}

impl Screen for WelcomeScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Welcome
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Right => self.focus.next(FIELDS.len()),
            Key::Left => self.focus.previous(FIELDS.len()),
            Key::Esc => self.nav.request(Outcome::Skip),
            Key::Enter => match self.focused() {
                Some(Field::Start) => self.nav.request(Outcome::Continue),
                Some(Field::Skip) => self.nav.request(Outcome::Skip),
                None => {}
            },
            other => {
                self.focus.handle_key(other, FIELDS.len());
            }
        }
        self.sync_focus();
        None
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let mut lines = heading(
            "Welcome to gitwise",
            "Let's set up git, GitHub, commit conventions, branch naming and AI assistance.",
            theme,
        );
        for item in [
            "Initialize or select a repository",
            "Connect your GitHub account",
            "Choose branch and commit rules",
            "Pick an AI provider for commit messages",
        ] {
            lines.push(Line::from(vec![
                Span::styled("  • ", theme.muted_style()),
                Span::styled(item.to_string(), theme.text_style()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            self.start.span(theme),
            Span::raw("  "),
            self.skip.span(theme),
        ]));
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        "←/→ select · enter confirm · esc skip · ctrl+c quit"
    }

    fn nav(&self) -> &Nav {
        &self.nav
    }

    fn nav_mut(&mut self) -> &mut Nav {
        &mut self.nav
    }
}
