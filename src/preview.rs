//! Live preview engine
//!
//! Pure functions turning partial screen state into an example commit message or
//! branch name. Identical input always yields identical output.

use crate::config::CommitConvention;

/// Template used by the custom convention when the user leaves it blank
pub const DEFAULT_COMMIT_TEMPLATE: &str = "{type}: {description}";

/// Branch pattern used when the pattern is blank
pub const DEFAULT_BRANCH_PATTERN: &str = "{prefix}/{description}";

/// Shown instead of a branch example when naming rules are not enforced
pub const NO_NAMING_RESTRICTION: &str = "Any branch name is allowed (naming rules not enforced)";

/// Fixed example values substituted into templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTokens {
    pub commit_type: String,
    pub scope: String,
    pub description: String,
    pub prefix: String,
    pub issue: String,
    pub body: String,
    pub emoji: String,
}

impl Default for ExampleTokens {
    fn default() -> Self {
        Self {
            commit_type: "feat".to_string(),
            scope: "auth".to_string(),
            description: "add login endpoint".to_string(),
            prefix: "feature".to_string(),
            issue: "PROJ-123".to_string(),
            body: "Explain what changed and why.".to_string(),
            emoji: "✨".to_string(),
        }
    }
}

/// Commit screen state relevant to the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPreviewInput<'a> {
    pub convention: CommitConvention,
    /// Checked commit types in display order
    pub types: &'a [String],
    pub require_scope: bool,
    pub include_body: bool,
    /// Template for the custom convention
    pub template: &'a str,
}

/// Naming screen state relevant to the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPreviewInput<'a> {
    pub enforce: bool,
    pub pattern: &'a str,
    /// Checked prefixes in display order
    pub prefixes: &'a [String],
}

/// What to preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewRequest<'a> {
    Commit(CommitPreviewInput<'a>),
    Branch(BranchPreviewInput<'a>),
}

/// Compute the preview string for a request
pub fn preview(request: &PreviewRequest<'_>) -> String {
    match request {
        PreviewRequest::Commit(input) => commit_preview(input),
        PreviewRequest::Branch(input) => branch_preview(input),
    }
}

/// Example commit message for the selected convention
pub fn commit_preview(input: &CommitPreviewInput<'_>) -> String {
    let template = match input.convention {
        CommitConvention::Conventional if input.require_scope => "{type}({scope}): {description}",
        CommitConvention::Conventional => "{type}: {description}",
        CommitConvention::Angular => "{type}({scope}): {description}",
        CommitConvention::Gitmoji => "{emoji} {description}",
        CommitConvention::Custom if input.template.trim().is_empty() => DEFAULT_COMMIT_TEMPLATE,
        CommitConvention::Custom => input.template,
    };

    let mut tokens = ExampleTokens::default();
    if let Some(first) = input.types.first() {
        tokens.commit_type = first.clone();
    }

    let mut message = substitute(template, &tokens);
    if input.include_body {
        message.push_str("\n\n");
        message.push_str(&tokens.body);
    }
    message
}

/// Example branch name for the naming pattern
pub fn branch_preview(input: &BranchPreviewInput<'_>) -> String {
    if !input.enforce {
        return NO_NAMING_RESTRICTION.to_string();
    }
    let pattern = if input.pattern.trim().is_empty() {
        DEFAULT_BRANCH_PATTERN
    } else {
        input.pattern
    };

    let mut tokens = ExampleTokens {
        description: "add-login-page".to_string(),
        ..ExampleTokens::default()
    };
    if let Some(first) = input.prefixes.first() {
        tokens.prefix = first.clone();
    }
    substitute(pattern, &tokens)
}

/// Replace known `{placeholder}`s in `template`
///
/// Unknown placeholders and unbalanced braces are copied through unchanged.
pub fn substitute(template: &str, tokens: &ExampleTokens) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match token_value(name, tokens) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn token_value<'a>(name: &str, tokens: &'a ExampleTokens) -> Option<&'a str> {
    let value = match name {
        "type" => &tokens.commit_type,
        "scope" => &tokens.scope,
        "description" => &tokens.description,
        "prefix" => &tokens.prefix,
        "issue" => &tokens.issue,
        "body" => &tokens.body,
        "emoji" => &tokens.emoji,
        _ => return None,
    };
    Some(value.as_str())
}
