//! View rendering modules

pub mod confirm;
mod pull_request;
mod wizard;

pub use confirm::{confirm_lines, render_confirm_dialog};
pub use pull_request::render_pull_request;
pub use wizard::render_wizard;

/// Breadcrumb navigation path segments
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    segments: Vec<String>,
}

impl Breadcrumb {
    /// Create a new breadcrumb with the root "gitwise" segment
    pub fn new() -> Self {
        Self {
            segments: vec!["gitwise".to_string()],
        }
    }

    /// Add a segment to the breadcrumb path
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Format the breadcrumb as a display string with " > " separators
    pub fn display(&self) -> String {
        self.segments.join(" > ")
    }
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_display() {
        let breadcrumb = Breadcrumb::new().push("Setup").push("Branches");
        assert_eq!(breadcrumb.display(), "gitwise > Setup > Branches");
    }
}
