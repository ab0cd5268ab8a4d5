//! Expected-output encodings: the success scope dump and the failure diagnostic line.

pub mod diagnostic;
pub mod scope_dump;

use serde::Serialize;

use diagnostic::Diagnostic;
use crate::scope::ScopeTree;

/// What the analyzer must print for one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "expected", rename_all = "lowercase")]
pub enum Expected {
    Success(ScopeTree),
    Failure(Diagnostic),
}

impl Expected {
    pub fn is_success(&self) -> bool {
        matches!(self, Expected::Success(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Expected::Success(_) => "success",
            Expected::Failure(_) => "failure",
        }
    }

    /// Render the expected output text, without storage normalization.
    pub fn render(&self) -> String {
        match self {
            Expected::Success(tree) => scope_dump::render(tree),
            Expected::Failure(diag) => diag.to_string(),
        }
    }
}

impl From<ScopeTree> for Expected {
    fn from(tree: ScopeTree) -> Self {
        Expected::Success(tree)
    }
}

impl From<Diagnostic> for Expected {
    fn from(diag: Diagnostic) -> Self {
        Expected::Failure(diag)
    }
}

/// Storage form of a `.in` file: surrounding blank lines and whitespace removed, so the
/// first source line is line 1.
pub fn normalize_source(source: &str) -> &str {
    source.trim()
}

/// Storage form of a `.out` file: trimmed, then exactly one trailing newline unless the
/// text is empty.
pub fn normalize_output(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    }
}
