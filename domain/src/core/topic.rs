//! Topic value object

use serde::{Deserialize, Serialize};

/// The debate topic (Value Object)
///
/// Unlike most value objects in this crate, a topic carries no invariant:
/// whatever string the topic source hands over is accepted verbatim,
/// including the empty string. The debate runs to completion regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Create a new topic; no validation is performed
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Get the topic content
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the topic is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Topic::new(s)
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Topic::new(s)
    }
}
