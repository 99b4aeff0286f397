//! Port for obtaining the debate topic.

use debate_domain::Topic;
use thiserror::Error;

/// Errors raised while collecting a topic
#[derive(Error, Debug)]
pub enum TopicError {
    #[error("Failed to read topic: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for the external topic source.
///
/// A single blocking call, invoked exactly once before round 1. The
/// returned topic is accepted without validation; empty is fine.
pub trait TopicSource {
    fn collect(&self) -> Result<Topic, TopicError>;
}

/// A preset topic, for non-interactive runs and tests.
pub struct FixedTopic(Topic);

impl FixedTopic {
    pub fn new(topic: impl Into<Topic>) -> Self {
        Self(topic.into())
    }
}

impl TopicSource for FixedTopic {
    fn collect(&self) -> Result<Topic, TopicError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_topic_returns_preset_value() {
        let source = FixedTopic::new("AI regulation");
        assert_eq!(source.collect().unwrap().as_str(), "AI regulation");
    }

    #[test]
    fn test_fixed_topic_allows_empty() {
        let source = FixedTopic::new("");
        assert!(source.collect().unwrap().is_empty());
    }
}
