//! Answer and citation types returned by the agent backend.

use serde::{Deserialize, Serialize};

/// Label shown for a source with no usable title or url.
pub const SOURCE_FALLBACK_LABEL: &str = "Fonte";

/// A citation accompanying an answer.
///
/// Both fields are optional in the wire format; an empty string counts as
/// absent for display purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
        }
    }

    /// Display label: title, falling back to the url, falling back to
    /// [`SOURCE_FALLBACK_LABEL`].
    pub fn label(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.url))
            .unwrap_or(SOURCE_FALLBACK_LABEL)
    }

    /// Link target: the url, falling back to `"#"` so the entry still
    /// renders as a link.
    pub fn href(&self) -> &str {
        non_empty(&self.url).unwrap_or("#")
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// The agent's answer to a single question: display text plus ordered
/// citations. Produced exactly once per successful request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl AnswerResult {
    pub fn new(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            text: text.into(),
            sources,
        }
    }
}
