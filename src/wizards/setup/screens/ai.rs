//! AI screen: provider, plan and credentials for commit message generation

use ratatui::text::{Line, Text};

use crate::config::{AiPlan, AiProvider, Config};
use crate::input::Key;
use crate::tui::theme::Theme;
use crate::tui::widgets::{Button, Checkbox, Dropdown, RadioGroup, TextField};

use super::super::screen::{
    clear_error_for, heading, push_error, Effect, FieldError, FocusRing, Nav, Outcome, Screen,
};
use super::super::step::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Provider,
    Plan,
    ApiKey,
    Model,
    GenerateCommitMessages,
    Continue,
}

const FIELDS: [Field; 6] = [
    Field::Provider,
    Field::Plan,
    Field::ApiKey,
    Field::Model,
    Field::GenerateCommitMessages,
    Field::Continue,
];

/// AI provider step
#[derive(Debug, Clone)]
pub struct AiScreen {
    provider: Dropdown,
    plan: RadioGroup,
    api_key: TextField,
    model: TextField,
    generate: Checkbox,
    continue_button: Button,
    error: Option<FieldError<Field>>,
    focus: FocusRing,
    nav: Nav,
}

impl AiScreen {
    pub fn new(config: &Config) -> Self {
        let ai = &config.ai;
        let mut provider = Dropdown::new(AiProvider::ALL.iter().map(|p| p.label()));
        provider.select_option(ai.provider.label());
        let mut plan = RadioGroup::new(AiPlan::ALL.iter().map(|p| p.label()));
        plan.select_option(ai.plan.label());

        let mut screen = Self {
            provider,
            plan,
            api_key: TextField::new("csk-...")
                .with_value(ai.api_key.clone())
                .password(),
            model: TextField::new(ai.provider.default_model()).with_value(ai.model.clone()),
            generate: Checkbox::new(
                "Generate commit messages",
                ai.generate_commit_messages,
            ),
            continue_button: Button::new("Continue"),
            error: None,
            focus: FocusRing::default(),
            nav: Nav::default(),
        };
        screen.sync_focus();
        screen
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.current(&FIELDS)
    }

    pub fn error_field(&self) -> Option<Field> {
        self.error.as_ref().map(|e| e.field)
    }

    pub fn selected_provider(&self) -> AiProvider {
        AiProvider::ALL
            .get(self.provider.selected())
            .copied()
            .unwrap_or_default()
    }

    pub fn model_placeholder(&self) -> &str {
        self.model.placeholder()
    }

    fn selected_plan(&self) -> AiPlan {
        AiPlan::ALL
            .get(self.plan.selected())
            .copied()
            .unwrap_or_default()
    }

    fn validate(&self) -> Result<(), FieldError<Field>> {
        if self.api_key.value().trim().is_empty() {
            return Err(FieldError::new(Field::ApiKey, "API key is required"));
        }
        Ok(())
    }

    fn handle_dropdown(&mut self, key: Key) -> bool {
        let consumed = match key {
            Key::Enter => {
                self.provider.toggle();
                true
            }
            Key::Esc if self.provider.is_open() => {
                self.provider.close();
                true
            }
            Key::Down | Key::Right => self.provider.next() || key == Key::Right,
            Key::Up | Key::Left => self.provider.previous() || key == Key::Left,
            _ => false,
        };
        let default_model = self.selected_provider().default_model();
        if self.model.placeholder() != default_model {
            self.model.set_placeholder(default_model);
        }
        consumed
    }

    fn sync_focus(&mut self) {
        let focused = self.focused_field();
        self.api_key.set_focused(focused == Some(Field::ApiKey));
        self.model.set_focused(focused == Some(Field::Model));
        self.generate
            .set_focused(focused == Some(Field::GenerateCommitMessages));
        self.continue_button
            .set_focused(focused == Some(Field::Continue));
        if focused != Some(Field::Provider) {
            self.provider.close();
        }
    }
}

impl Screen for AiScreen {
    fn step(&self) -> WizardStep {
        WizardStep::Ai
    }

    fn update(&mut self, key: Key) -> Option<Effect> {
        let Some(field) = self.focused_field() else {
            return None;
        };

        if field == Field::Provider && self.handle_dropdown(key) {
            self.sync_focus();
            return None;
        }

        match (field, key) {
            (_, Key::Esc) => self.nav.request(Outcome::Back),
            (Field::Plan, Key::Right | Key::Space | Key::Enter) => self.plan.next(),
            (Field::Plan, Key::Left) => self.plan.previous(),
            (Field::GenerateCommitMessages, Key::Space) => self.generate.toggle(),
            (Field::Continue, Key::Enter) => match self.validate() {
                Ok(()) => {
                    self.error = None;
                    self.nav.request(Outcome::Continue);
                }
                Err(error) => self.error = Some(error),
            },
            (_, Key::Enter) => self.focus.next(FIELDS.len()),
            (_, other) => {
                if !self.focus.handle_key(other, FIELDS.len()) {
                    match field {
                        Field::ApiKey => {
                            if self.api_key.handle_key(other) {
                                clear_error_for(&mut self.error, Field::ApiKey);
                            }
                        }
                        Field::Model => {
                            self.model.handle_key(other);
                        }
                        _ => {}
                    }
                }
            }
        }
        self.sync_focus();
        None
    }

    fn commit(&self, config: &mut Config) {
        let ai = &mut config.ai;
        ai.provider = self.selected_provider();
        ai.plan = self.selected_plan();
        ai.api_key = self.api_key.value().trim().to_string();
        ai.model = self.model.value().trim().to_string();
        ai.generate_commit_messages = self.generate.is_checked();
    }

    fn render(&self, theme: &Theme) -> Text<'static> {
        let focused = self.focused_field();
        let mut lines = heading(
            "AI provider",
            "gitwise can draft commit messages from your staged changes.",
            theme,
        );
        lines.extend(self.provider.render_lines(
            "Provider",
            focused == Some(Field::Provider),
            theme,
        ));
        lines.push(
            self.plan
                .render_line("Plan", focused == Some(Field::Plan), theme),
        );
        lines.push(self.api_key.render_line("API key", theme));
        lines.push(self.model.render_line("Model", theme));
        lines.push(self.generate.render_line(theme));
        lines.push(Line::from(""));
        lines.push(self.continue_button.render_line(theme));
        push_error(&mut lines, self.error(), theme);
        Text::from(lines)
    }

    fn hints(&self) -> &'static str {
        if self.provider.is_open() {
            "↑↓ choose · enter close · esc close"
        } else {
            "tab/↑↓ move · enter open · ←/→ plan · esc back"
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
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
    use crate::wizards::setup::screens::test_support::type_text;

    fn screen() -> AiScreen {
        AiScreen::new(&Config::default())
    }

    fn focus(screen: &mut AiScreen, field: Field) {
        while screen.focused_field() != Some(field) {
            screen.update(Key::Tab);
        }
    }

    #[test]
    fn test_empty_api_key_blocks_continue() {
        let mut screen = screen();
        focus(&mut screen, Field::Continue);
        screen.update(Key::Enter);
        assert_eq!(screen.error(), Some("API key is required"));
        assert_eq!(screen.error_field(), Some(Field::ApiKey));
        assert!(!screen.should_continue());
    }

    #[test]
    fn test_valid_api_key_continues() {
        let mut screen = screen();
        focus(&mut screen, Field::ApiKey);
        type_text(&mut screen, "csk-test-key-123");
        focus(&mut screen, Field::Continue);
        screen.update(Key::Enter);
        assert!(screen.error().is_none());
        assert!(screen.should_continue());

        let mut config = Config::default();
        screen.commit(&mut config);
        assert_eq!(config.ai.api_key, "csk-test-key-123");
    }

    #[test]
    fn test_error_clears_only_on_api_key_edit() {
        let mut screen = screen();
        focus(&mut screen, Field::Continue);
        screen.update(Key::Enter);
        assert!(screen.error().is_some());

        focus(&mut screen, Field::Model);
        type_text(&mut screen, "x");
        focus(&mut screen, Field::GenerateCommitMessages);
        screen.update(Key::Space);
        assert!(screen.error().is_some());

        focus(&mut screen, Field::ApiKey);
        type_text(&mut screen, "k");
        assert!(screen.error().is_none());
    }

    #[test]
    fn test_backspace_edits_api_key() {
        let mut screen = screen();
        focus(&mut screen, Field::ApiKey);
        type_text(&mut screen, "csk-123");
        screen.update(Key::Backspace);
        let mut config = Config::default();
        screen.commit(&mut config);
        assert_eq!(config.ai.api_key, "csk-12");
    }

    #[test]
    fn test_plan_radio_wraps() {
        let mut screen = screen();
        focus(&mut screen, Field::Plan);
        screen.update(Key::Right);
        let mut config = Config::default();
        screen.commit(&mut config);
        assert_eq!(config.ai.plan, AiPlan::Pro);

        screen.update(Key::Right);
        screen.commit(&mut config);
        assert_eq!(config.ai.plan, AiPlan::Free);
    }

    #[test]
    fn test_provider_change_updates_model_placeholder() {
        let mut screen = screen();
        screen.update(Key::Enter);
        screen.update(Key::Down);
        assert_eq!(screen.selected_provider(), AiProvider::OpenAi);
        assert_eq!(screen.model_placeholder(), "gpt-4o-mini");
        screen.update(Key::Enter);

        screen.update(Key::Tab);
        assert_eq!(screen.focused_field(), Some(Field::Plan));
    }

    #[test]
    fn test_api_key_masked_in_render() {
        let mut screen = screen();
        focus(&mut screen, Field::ApiKey);
        type_text(&mut screen, "secret");
        let rendered = plain_text(&screen.render(&Theme::default()));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("••••••"));
    }
}
