//! Summary screen: review everything before saving

use ratatui::text::{Line, Span, Text};

use crate::config::Config;
use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::widgets::Button;

use super::super::screen::{heading, Effect, FocusRing, Nav, Outcome, Screen};
use super::super::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Save,
    Back,
}

const FIELDS: [Field; 2] = [Field::Save, Field::Back];

/// One titled block of the overview
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    title: &'static str,
    rows: Vec<(&'static str, String)>,
}

/// Read-only review step
#[derive(Debug, Clone)]
pub struct SummaryScreen {
    sections: Vec<Section>,
    save: Button,
    back: Button,
    focus: FocusRing,
    nav: Nav,
}

/// Hide a secret, keeping only whether it is set
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else {
        "••••••••".to_string()
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn sections(config: &Config) -> Vec<Section> {
    let mut github = vec![("Enabled", yes_no(config.github.enabled))];
    if config.github.enabled {
        github.push(("Username", config.github.username.clone()));
        github.push(("Token", mask_secret(&config.github.token)));
        github.push((
            "Pull requests",
            yes_no(config.github.create_pull_requests),
        ));
    }

    let mut naming = vec![("Enforce", yes_no(config.naming.enforce))];
    if config.naming.enforce {
        naming.push(("Pattern", config.naming.pattern.clone()));
        naming.push(("Prefixes", list(&config.naming.prefixes)));
    }

    vec![
        Section {
            title: "Git",
            rows: vec![
                ("Repository", config.git.repo_path.clone()),
                ("Default branch", config.git.default_branch.clone()),
                ("Pull strategy", config.git.pull_strategy.label().to_string()),
                ("Protected", list(&config.git.protected_branches)),
                (
                    "Delete merged",
                    yes_no(config.git.delete_merged_branches),
                ),
            ],
        },
        Section {
            title: "GitHub",
            rows: github,
        },
        Section {
            title: "Commits",
            rows: vec![
                ("Convention", config.commits.convention.label().to_string()),
                ("Types", list(&config.commits.types)),
                ("Require scope", yes_no(config.commits.require_scope)),
                ("Include body", yes_no(config.commits.include_body)),
            ],
        },
        Section {
            title: "Branch naming",
            rows: naming,
        },
        Section {
            title: "AI",
            rows: vec![
                ("Provider", config.ai.provider.label().to_string()),
                ("Plan", config.ai.plan.label().to_string()),
                ("API key", mask_secret(&config.ai.api_key)),
                ("Model", config.ai.effective_model().to_string()),
                (
                    "Commit messages",
                    yes_no(config.ai.generate_commit_messages),
                ),
            ],
        },
    ]
}

impl SummaryScreen {
    pub fn new(config: &Config) -> Self {
        let mut screen = Self {
            sections: sections(config),
            save: Button::new("Save"),
            back: Button::new("Back"),
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
        self.save.set_focused(focused == Some(Field::Save));
        self.back.set_focused(focused == Some(Field::Back));
    }
}

impl Screen for SummaryScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Summary
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Esc => self.nav.request(Outcome::Back),
            Key::Right => self.focus.next(FIELDS.len()),
            Key::Left => self.focus.previous(FIELDS.len()),
            Key::Enter => match self.focused() {
                Some(Field::Save) => self.nav.request(Outcome::Save),
                Some(Field::Back) => self.nav.request(Outcome::Back),
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
            "Summary",
            "Review your settings. Nothing is written until you save.",
            theme,
        );
        for section in &self.sections {
            lines.push(Line::from(Span::styled(
                section.title.to_string(),
                theme.label_style(true),
            )));
            for (label, value) in &section.rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<16}", label), theme.muted_style()),
                    Span::styled(value.clone(), theme.text_style()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            self.save.span(theme),
            Span::raw("  "),
            self.back.span(theme),
        ]));
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        "←/→ select · enter confirm · esc back · ctrl+c quit"
    }

    fn nav(&self) -> &Nav {
        &self.nav
    }

    fn nav_mut(&mut self) -> &mut Nav {
        &mut self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizards::setup::screen::plain_text;

    fn config() -> Config {
        let mut config = Config::default();
        config.github.enabled = true;
        config.github.username = "octocat".to_string();
        config.github.token = "ghp_secret".to_string();
        config.ai.api_key = "csk-secret".to_string();
        config
    }

    #[test]
    fn test_secrets_are_masked() {
        let screen = SummaryScreen::new(&config());
        let rendered = plain_text(&screen.render(&Theme::default()));
        assert!(rendered.contains("octocat"));
        assert!(!rendered.contains("ghp_secret"));
        assert!(!rendered.contains("csk-secret"));
        assert!(rendered.contains("••••••••"));
        assert!(rendered.contains("llama3.1-8b"));
    }

    #[test]
    fn test_save_and_back() {
        let mut screen = SummaryScreen::new(&config());
        screen.update(Key::Enter);
        assert!(screen.should_save());

        let mut screen = SummaryScreen::new(&config());
        screen.update(Key::Tab);
        screen.update(Key::Enter);
        assert!(screen.should_go_back());

        let mut screen = SummaryScreen::new(&config());
        screen.update(Key::Esc);
        assert!(screen.should_go_back());
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("abc"), "••••••••");
    }
}
