//! Interactive topic prompt on standard input.

use debate_application::ports::topic_source::{TopicError, TopicSource};
use debate_domain::Topic;
use std::io::{BufRead, Write};

/// Prompts on stdout and reads one line from stdin.
///
/// The line is trimmed but otherwise accepted verbatim; an empty answer is
/// a valid topic.
pub struct StdinTopicSource;

impl StdinTopicSource {
    /// Read a topic from `input`, echoing the prompt to `output` first.
    fn collect_from(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Topic, TopicError> {
        write!(output, "Enter topic for debate: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(Topic::new(line.trim()))
    }
}

impl TopicSource for StdinTopicSource {
    fn collect(&self) -> Result<Topic, TopicError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.collect_from(&mut stdin.lock(), &mut stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_trims_the_line() {
        let mut input = "  Should AI be regulated?  \n".as_bytes();
        let mut output = Vec::new();
        let topic = StdinTopicSource
            .collect_from(&mut input, &mut output)
            .unwrap();
        assert_eq!(topic.as_str(), "Should AI be regulated?");
    }

    #[test]
    fn test_collect_prompts_before_reading() {
        let mut input = "anything\n".as_bytes();
        let mut output = Vec::new();
        StdinTopicSource
            .collect_from(&mut input, &mut output)
            .unwrap();
        assert_eq!(output, b"Enter topic for debate: ");
    }

    #[test]
    fn test_empty_line_yields_empty_topic() {
        let mut input = "\n".as_bytes();
        let mut output = Vec::new();
        let topic = StdinTopicSource
            .collect_from(&mut input, &mut output)
            .unwrap();
        assert!(topic.is_empty());
    }
}
