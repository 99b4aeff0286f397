//! Append-only transcript store

use crate::core::role::RoleId;
use crate::transcript::entry::TranscriptEntry;
use crate::transcript::view::ContextualView;

/// Number of trailing entries covered by the shared recent-summary window.
pub const RECENT_WINDOW: usize = 6;

/// Exclusive owner of the debate transcript (Entity)
///
/// The transcript only ever grows; entries are never mutated or reordered
/// after append. All cross-debater visibility flows through
/// [`ContextualView`]s derived here.
///
/// # Example
///
/// ```
/// use debate_domain::transcript::MemoryStore;
/// use debate_domain::RoleId;
///
/// let mut store = MemoryStore::new();
/// store.append(RoleId::new("Scientist"), "AI must be regulated.", 1);
///
/// let view = store.context_for(&RoleId::new("Philosopher"));
/// assert!(view.own_history.is_empty());
/// assert_eq!(view.recent_summary, "Scientist: AI must be regulated.");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    transcript: Vec<TranscriptEntry>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an utterance to the transcript.
    ///
    /// The store performs no validation of role alternation or round
    /// monotonicity; that ordering is the orchestrator's responsibility.
    /// The new entry is visible to every subsequent `context_for` call.
    pub fn append(&mut self, role: RoleId, text: impl Into<String>, round: u32) {
        self.transcript.push(TranscriptEntry {
            role,
            text: text.into(),
            round,
        });
    }

    /// Derive a fresh contextual view for `role`.
    ///
    /// Pure read: `own_history` is the stable same-role filter, the recent
    /// summary spans the last [`RECENT_WINDOW`] entries regardless of role
    /// (each side gets to "hear" the other's latest points), and the full
    /// snapshot is included for repetition validation.
    pub fn context_for(&self, role: &RoleId) -> ContextualView {
        let own_history: Vec<TranscriptEntry> = self
            .transcript
            .iter()
            .filter(|e| &e.role == role)
            .cloned()
            .collect();

        let tail_start = self.transcript.len().saturating_sub(RECENT_WINDOW);
        let recent_summary = self.transcript[tail_start..]
            .iter()
            .map(|e| format!("{}: {}", e.role, e.text))
            .collect::<Vec<_>>()
            .join(" | ");

        ContextualView {
            own_history,
            recent_summary,
            transcript_snapshot: self.transcript.clone(),
        }
    }

    /// Read-only copy of the entire transcript, for the judge.
    pub fn full_transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.clone()
    }

    /// Number of entries appended so far
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    /// True if nothing has been spoken yet
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(n: usize) -> MemoryStore {
        let mut store = MemoryStore::new();
        for i in 0..n {
            let role = if i % 2 == 0 { "Scientist" } else { "Philosopher" };
            store.append(RoleId::new(role), format!("statement {}", i + 1), (i + 1) as u32);
        }
        store
    }

    #[test]
    fn test_append_grows_transcript_in_order() {
        let store = store_with(3);
        let transcript = store.full_transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[0].round, 1);
        assert_eq!(transcript[2].round, 3);
    }

    #[test]
    fn test_entries_are_stable_after_read_back() {
        let store = store_with(2);
        let first = store.full_transcript();
        let second = store.full_transcript();
        assert_eq!(first, second);
    }

    #[test]
    fn test_own_history_filters_by_role() {
        let store = store_with(5);
        let view = store.context_for(&RoleId::new("Scientist"));
        assert_eq!(view.own_history.len(), 3);
        assert!(view.own_history_is_for(&RoleId::new("Scientist")));
        // original order preserved
        assert_eq!(view.own_history[0].round, 1);
        assert_eq!(view.own_history[2].round, 5);
    }

    #[test]
    fn test_recent_summary_covers_whole_short_transcript() {
        let store = store_with(2);
        let view = store.context_for(&RoleId::new("Scientist"));
        assert_eq!(
            view.recent_summary,
            "Scientist: statement 1 | Philosopher: statement 2"
        );
    }

    #[test]
    fn test_recent_summary_windows_to_last_six() {
        let store = store_with(8);
        let view = store.context_for(&RoleId::new("Philosopher"));
        let parts: Vec<&str> = view.recent_summary.split(" | ").collect();
        assert_eq!(parts.len(), RECENT_WINDOW);
        assert!(parts[0].ends_with("statement 3"));
        assert!(parts[5].ends_with("statement 8"));
    }

    #[test]
    fn test_recent_summary_is_identical_for_both_roles() {
        let store = store_with(7);
        let a = store.context_for(&RoleId::new("Scientist"));
        let b = store.context_for(&RoleId::new("Philosopher"));
        assert_eq!(a.recent_summary, b.recent_summary);
    }

    #[test]
    fn test_view_is_recomputed_after_append() {
        let mut store = store_with(1);
        let before = store.context_for(&RoleId::new("Scientist"));
        store.append(RoleId::new("Philosopher"), "a reply", 2);
        let after = store.context_for(&RoleId::new("Scientist"));
        assert_eq!(before.transcript_snapshot.len(), 1);
        assert_eq!(after.transcript_snapshot.len(), 2);
    }

    #[test]
    fn test_empty_store_yields_empty_view() {
        let store = MemoryStore::new();
        let view = store.context_for(&RoleId::new("Scientist"));
        assert!(view.own_history.is_empty());
        assert!(view.recent_summary.is_empty());
        assert!(view.transcript_snapshot.is_empty());
        assert!(store.is_empty());
    }
}
