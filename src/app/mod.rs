//! Application shell and main event loop
//!
//! Owns the terminal and the setup wizard, feeds terminal events to the wizard and
//! redraws after every change.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::git::Git2Backend;
use crate::input::Key;
use crate::logging::LogFileInfo;
use crate::tui::theme::Theme;
use crate::tui::views::render_wizard;
use crate::tui::Tui;
use crate::wizards::setup::{Transition, Wizard};

/// How the setup session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The configuration was written to this path
    Saved(PathBuf),
    /// The wizard finished but saving failed
    SaveFailed(String),
    /// The user quit or skipped before saving
    Cancelled,
}

/// Main application struct
pub struct App {
    wizard: Wizard,
    /// Where the configuration is saved, for the final report
    location: PathBuf,
    theme: Theme,
    tui: Tui,
    /// Information about the current log file
    log_file_info: LogFileInfo,
    needs_render: bool,
}

impl App {
    /// Create the application around an already loaded configuration
    pub fn new(config: Config, log_file_info: LogFileInfo) -> Result<Self> {
        let store = FileConfigStore::default();
        let location = store.location();
        let wizard = Wizard::new(config, Box::new(Git2Backend), Box::new(store));
        Ok(Self {
            wizard,
            location,
            theme: Theme::default(),
            tui: Tui::new()?,
            log_file_info,
            needs_render: true,
        })
    }

    /// Run the wizard until it is cancelled or dismissed
    pub fn run(&mut self) -> Result<SetupOutcome> {
        self.tui.enter()?;
        tracing::info!(
            "Setup wizard started, logging to {}",
            self.log_file_info.path.display()
        );

        let result = self.event_loop();

        // Exit TUI mode (also done in Drop, but explicit is clearer)
        self.tui.exit()?;

        result?;
        Ok(outcome(&self.wizard, &self.location))
    }

    /// Main event loop
    fn event_loop(&mut self) -> Result<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.wizard.is_finished() {
            if self.needs_render {
                let wizard = &self.wizard;
                let theme = &self.theme;
                self.tui.draw(|frame| render_wizard(frame, wizard, theme))?;
                self.needs_render = false;
            }

            if event::poll(tick_rate)? {
                let event = event::read()?;
                if apply_event(&mut self.wizard, &event) {
                    self.needs_render = true;
                }
            }
        }
        Ok(())
    }
}

/// Feed one terminal event to the wizard; returns whether a redraw is needed
pub fn apply_event(wizard: &mut Wizard, event: &Event) -> bool {
    match event {
        Event::Key(key_event) => match Key::from_event(*key_event) {
            Some(key) => {
                let transition = wizard.handle_key(key);
                if transition != Transition::None {
                    tracing::debug!("{:?} after {}", transition, key.name());
                }
                true
            }
            None => false,
        },
        Event::Resize(_, _) => true,
        _ => false,
    }
}

/// Summarize how the wizard ended
pub fn outcome(wizard: &Wizard, location: &std::path::Path) -> SetupOutcome {
    if wizard.is_cancelled() || !wizard.is_completed() {
        SetupOutcome::Cancelled
    } else if let Some(error) = wizard.save_error() {
        SetupOutcome::SaveFailed(error.to_string())
    } else {
        SetupOutcome::Saved(location.to_path_buf())
    }
}
