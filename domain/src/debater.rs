//! Debating participant entity

use crate::core::role::RoleId;
use crate::core::topic::Topic;
use crate::transcript::view::ContextualView;

/// Suffix appended to an utterance that would exactly repeat a prior entry.
pub const EXPANSION_MARKER: &str = " (expanded)";

/// One side of the debate (Entity)
///
/// A debater holds a fixed script of candidate utterances, one intended per
/// round, and a log of what it actually said. The two can diverge: a line
/// that would exactly repeat anything already in the transcript is expanded
/// before it is spoken.
///
/// # Example
///
/// ```
/// use debate_domain::{Debater, MemoryStore, RoleId, Topic};
///
/// let mut debater = Debater::new("Scientist", "Scientist", vec![
///     "AI must be regulated.".to_string(),
/// ]);
/// let store = MemoryStore::new();
/// let view = store.context_for(debater.id());
///
/// let spoken = debater.speak(1, &Topic::new("AI regulation"), &view);
/// assert_eq!(spoken, "AI must be regulated.");
/// assert_eq!(debater.spoken_log(), ["AI must be regulated."]);
/// ```
#[derive(Debug, Clone)]
pub struct Debater {
    id: RoleId,
    label: String,
    script: Vec<String>,
    spoken_log: Vec<String>,
}

impl Debater {
    /// Create a debater with a fixed script.
    pub fn new(id: impl Into<RoleId>, label: impl Into<String>, script: Vec<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            script,
            spoken_log: Vec::new(),
        }
    }

    /// The role this debater speaks as
    pub fn id(&self) -> &RoleId {
        &self.id
    }

    /// Display label used in placeholders and console output
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Everything this debater has actually said, in order
    pub fn spoken_log(&self) -> &[String] {
        &self.spoken_log
    }

    /// Produce the utterance for `round` (1-indexed).
    ///
    /// Out-of-range rounds degrade to a placeholder rather than failing.
    /// The repetition check runs against the whole transcript snapshot, not
    /// just this side's history: the other debater may already have used
    /// the same line. A single expansion pass guarantees the output differs
    /// from every entry seen so far.
    ///
    /// `topic` is accepted for extensibility; script selection ignores it.
    pub fn speak(&mut self, round: u32, _topic: &Topic, view: &ContextualView) -> String {
        let mut text = match round
            .checked_sub(1)
            .and_then(|i| self.script.get(i as usize))
        {
            Some(line) => line.clone(),
            None => format!("[{}] (no message for round {})", self.label, round),
        };

        if view.has_exact_text(&text) {
            text.push_str(EXPANSION_MARKER);
        }

        self.spoken_log.push(text.clone());
        text
    }
}
