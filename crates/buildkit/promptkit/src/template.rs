//! Named prompt templates.

use serde::{Deserialize, Serialize};

use crate::error::{PromptError, PromptResult};
use crate::format::{format, placeholder_count};

/// A reusable, named prompt template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub name: String,
    pub body: String,
}

impl PromptTemplate {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Number of `{s}` placeholders in the body.
    pub fn placeholders(&self) -> usize {
        placeholder_count(&self.body)
    }

    /// Render with [`format`] semantics: missing substitutions drop their
    /// placeholder silently.
    pub fn render<S: AsRef<str>>(&self, substitutions: &[S]) -> PromptResult<String> {
        format(&self.body, substitutions)
    }

    /// Render, but refuse to drop placeholders.
    ///
    /// Fails with [`PromptError::MissingSubstitution`] when fewer substitutions
    /// than placeholders are supplied. Extra substitutions are still ignored.
    pub fn render_strict<S: AsRef<str>>(&self, substitutions: &[S]) -> PromptResult<String> {
        let expected = self.placeholders();
        if substitutions.len() < expected {
            tracing::debug!(
                template = %self.name,
                expected,
                supplied = substitutions.len(),
                "strict render rejected"
            );
            return Err(PromptError::MissingSubstitution {
                template: self.name.clone(),
                expected,
                supplied: substitutions.len(),
            });
        }
        self.render(substitutions)
    }
}
