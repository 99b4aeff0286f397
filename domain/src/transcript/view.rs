//! Per-request contextual view of the shared memory

use crate::core::role::RoleId;
use crate::transcript::entry::TranscriptEntry;

/// Derived snapshot of memory state tailored to one debater (Value Object)
///
/// Views are never stored or cached; the store rebuilds one on every
/// request because the transcript may have grown since the last read.
///
/// The view deliberately carries two different slices of the transcript:
/// `own_history` is the same-role filter meant for content, while
/// `transcript_snapshot` is the full record meant only for repetition
/// validation. The split is a policy convention, not a mechanical boundary.
#[derive(Debug, Clone)]
pub struct ContextualView {
    /// All entries spoken by the requesting role, in original order
    pub own_history: Vec<TranscriptEntry>,
    /// `"role: text"` for the most recent entries (all roles), `" | "`-joined
    pub recent_summary: String,
    /// The full transcript so far, for anti-repetition checking
    pub transcript_snapshot: Vec<TranscriptEntry>,
}

impl ContextualView {
    /// The role whose history this view was built for appears in every
    /// `own_history` entry; convenience check used in tests.
    pub fn own_history_is_for(&self, role: &RoleId) -> bool {
        self.own_history.iter().all(|e| &e.role == role)
    }

    /// True if any entry anywhere in the snapshot has exactly this text.
    pub fn has_exact_text(&self, text: &str) -> bool {
        self.transcript_snapshot.iter().any(|e| e.text == text)
    }
}
