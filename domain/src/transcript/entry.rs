//! Transcript entry entity

use crate::core::role::RoleId;
use serde::{Deserialize, Serialize};

/// A single utterance in the transcript (Entity)
///
/// Entries are immutable once appended; the store only ever clones them
/// outward. Insertion order is chronological round order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// The role that spoke this entry
    pub role: RoleId,
    /// The utterance text as actually spoken (after any expansion)
    pub text: String,
    /// Round number, 1-indexed
    pub round: u32,
}

impl TranscriptEntry {
    /// Create a new transcript entry
    pub fn new(role: impl Into<RoleId>, text: impl Into<String>, round: u32) -> Self {
        Self {
            role: role.into(),
            text: text.into(),
            round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_with_role_and_round() {
        let entry = TranscriptEntry::new("Scientist", "AI must be regulated.", 1);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["role"], "Scientist");
        assert_eq!(json["round"], 1);
    }
}
