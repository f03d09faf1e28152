//! Terminal UI module
//!
//! Terminal setup and teardown plus everything drawn with Ratatui.

pub mod header;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;

pub use header::Header;
pub use layout::ScreenLayout;
pub use theme::Theme;

use anyhow::{Context, Result};
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{self, stdout};

/// Terminal UI wrapper
///
/// Handles terminal setup, teardown, and provides the rendering surface.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Whether raw mode and the alternate screen are active
    entered: bool,
}

/// Error handler for terminal cleanup operations
/// Used during both normal exit and panic/drop scenarios
enum ErrorHandler {
    /// Log errors via tracing (normal exit)
    Tracing,
    /// Print errors to stderr (panic/drop, tracing may be unavailable)
    Stderr,
}

impl ErrorHandler {
    fn handle(&self, context: &str, error: impl std::fmt::Display) {
        match self {
            ErrorHandler::Tracing => tracing::warn!("{}: {}", context, error),
            ErrorHandler::Stderr => eprintln!("TUI teardown: {}: {}", context, error),
        }
    }
}

/// Restore the terminal, reporting failures through `handler`
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    handler: &ErrorHandler,
) {
    if let Err(e) = terminal.show_cursor() {
        handler.handle("failed to show cursor", e);
    }
    if let Err(e) = stdout().execute(LeaveAlternateScreen) {
        handler.handle("failed to leave alternate screen", e);
    }
    if let Err(e) = disable_raw_mode() {
        handler.handle("failed to disable raw mode", e);
    }
}

impl Tui {
    /// Create a new TUI instance
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Enter TUI mode (raw mode + alternate screen)
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        self.entered = true;
        stdout()
            .execute(EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        tracing::debug!("Entered TUI mode");
        Ok(())
    }

    /// Exit TUI mode (restore terminal)
    pub fn exit(&mut self) -> Result<()> {
        if self.entered {
            restore_terminal(&mut self.terminal, &ErrorHandler::Tracing);
            self.entered = false;
            tracing::debug!("Exited TUI mode");
        }
        Ok(())
    }

    /// Draw a frame
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // During drop tracing may not be available, so errors go to stderr
        if self.entered {
            restore_terminal(&mut self.terminal, &ErrorHandler::Stderr);
        }
    }
}
