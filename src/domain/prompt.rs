//! Prompt domain model.
//!
//! A [`Prompt`] is one immutable catalog entry: a title, a short description, the
//! copyable `content` payload, a category label and an ordered list of tags.
//! Records are supplied whole by a loader and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, opaque identifier of a prompt.
///
/// Unique across a catalog. Serialized as a plain JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One catalog entry.
///
/// `description` and `tags` are optional in the dataset file and default to
/// empty. Tags keep their order and duplicates; each one is a display chip.
/// The required fields also default to empty when absent, so that
/// [`Catalog::new`](crate::catalog::Catalog::new) reports the missing field by name.
///
/// # Examples
///
/// ```
/// use promptfolio::domain::Prompt;
///
/// let prompt = Prompt::new("react-hooks", "Custom React Hook", "Frontend", "Write a hook...")
///     .with_description("Extract reusable stateful logic")
///     .with_tags(["react", "hooks"]);
/// assert_eq!(prompt.tags, vec!["react", "hooks"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub id: PromptId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Prompt {
    /// Creates a prompt with an empty description and no tags.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: PromptId::new(id),
            title: title.into(),
            description: String::new(),
            content: content.into(),
            category: category.into(),
            tags: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Checks whether an already lower-cased needle occurs in any searchable field.
    ///
    /// Searchable fields are the title, description, content and every tag. An
    /// empty needle matches everything.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}
