//! Screen layout helper
//!
//! Renders the header and returns the content and footer areas.

use ratatui::prelude::*;

use crate::tui::header::{Header, HEADER_HEIGHT};

/// Default footer height (including top border)
pub const DEFAULT_FOOTER_HEIGHT: u16 = 2;

/// Screen layout builder
pub struct ScreenLayout<'a> {
    /// Total area for the screen
    area: Rect,
    header: Option<Header<'a>>,
    /// Footer height (set to 0 for no footer space)
    footer_height: u16,
}

impl<'a> ScreenLayout<'a> {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            header: None,
            footer_height: DEFAULT_FOOTER_HEIGHT,
        }
    }

    pub fn with_header(mut self, header: Header<'a>) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_footer_height(mut self, height: u16) -> Self {
        self.footer_height = height;
        self
    }

    /// Render the header (if present) and return layout areas
    pub fn render(self, frame: &mut Frame) -> LayoutAreas {
        let areas = self.split();
        if let (Some(header), Some(area)) = (self.header, areas.header) {
            header.render(frame, area);
        }
        areas
    }

    /// Compute the areas without drawing anything
    pub fn split(&self) -> LayoutAreas {
        let header_height = if self.header.is_some() {
            HEADER_HEIGHT
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(self.footer_height),
            ])
            .split(self.area);

        LayoutAreas {
            header: (header_height > 0).then_some(chunks[0]),
            content: chunks[1],
            footer: (self.footer_height > 0).then_some(chunks[2]),
        }
    }
}

/// Areas calculated by ScreenLayout
#[derive(Debug, Clone, Copy)]
pub struct LayoutAreas {
    /// Header area (if header was present)
    pub header: Option<Rect>,
    /// Main content area
    pub content: Rect,
    /// Footer area (if footer height > 0)
    pub footer: Option<Rect>,
}
