//! Pull request actions
//!
//! A pull request is presented as an [`ActionView`]: an informational header row
//! followed by actions. Destructive actions (merge, close) go through the
//! confirmation flow before they are returned to the caller.

use crate::confirm::{ActionItem, ActionView};
use crate::input::Key;

/// Something the user can do with a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullRequestAction {
    OpenInBrowser,
    Checkout,
    Merge,
    Close,
}

impl PullRequestAction {
    pub fn label(&self) -> &'static str {
        match self {
            PullRequestAction::OpenInBrowser => "Open in browser",
            PullRequestAction::Checkout => "Check out branch",
            PullRequestAction::Merge => "Merge",
            PullRequestAction::Close => "Close",
        }
    }

    /// Whether the action changes the pull request on the remote
    pub fn is_destructive(&self) -> bool {
        matches!(self, PullRequestAction::Merge | PullRequestAction::Close)
    }
}

/// What is shown about a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub head_branch: String,
    pub base_branch: String,
    pub url: String,
}

impl PullRequestSummary {
    /// One-line description used as the header row
    pub fn headline(&self) -> String {
        format!(
            "#{} {} ({} → {}, by {})",
            self.number, self.title, self.head_branch, self.base_branch, self.author
        )
    }
}

/// Build the action list for a pull request
pub fn pull_request_actions(pr: &PullRequestSummary) -> ActionView<PullRequestAction> {
    let actions = [
        PullRequestAction::OpenInBrowser,
        PullRequestAction::Checkout,
        PullRequestAction::Merge,
        PullRequestAction::Close,
    ];
    let mut items = vec![ActionItem::view_only(pr.headline())];
    items.extend(actions.into_iter().map(|action| {
        if action.is_destructive() {
            ActionItem::confirm(action.label(), action)
        } else {
            ActionItem::immediate(action.label(), action)
        }
    }));
    ActionView::new(items)
}

/// A pull request together with its action list
#[derive(Debug, Clone)]
pub struct PullRequestPanel {
    pr: PullRequestSummary,
    actions: ActionView<PullRequestAction>,
}

impl PullRequestPanel {
    pub fn new(pr: PullRequestSummary) -> Self {
        let actions = pull_request_actions(&pr);
        Self { pr, actions }
    }

    pub fn pull_request(&self) -> &PullRequestSummary {
        &self.pr
    }

    pub fn actions(&self) -> &ActionView<PullRequestAction> {
        &self.actions
    }

    /// Prompt for the pending confirmation, if any
    pub fn confirm_prompt(&self) -> Option<String> {
        self.actions.confirm().pending().map(|action| {
            format!("{} pull request #{}?", action.label(), self.pr.number)
        })
    }

    /// Feed a key; returns an action once it is ready to execute
    pub fn handle_key(&mut self, key: Key) -> Option<PullRequestAction> {
        let action = self.actions.handle_key(key);
        if let Some(action) = action {
            tracing::info!("Pull request #{}: {}", self.pr.number, action.label());
        }
        action
    }
}
