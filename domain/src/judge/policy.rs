//! Scoring policies
//!
//! The judge delegates transcript scoring to a policy so alternative
//! heuristics can be substituted without touching winner selection.

use crate::core::role::RoleId;
use crate::transcript::entry::TranscriptEntry;
use std::collections::BTreeMap;

/// Strategy for scoring a transcript, one total per role.
pub trait ScoringPolicy {
    fn score(&self, transcript: &[TranscriptEntry]) -> BTreeMap<RoleId, u32>;
}

/// Keyword-occurrence scoring.
///
/// Each role is associated with a set of keywords. Every transcript entry
/// is lowercased and scanned for each keyword as a substring; a role gains
/// one point per keyword found, once per entry. Scoring is by content, not
/// authorship: a keyword counts no matter which role spoke the line.
///
/// # Example
///
/// ```
/// use debate_domain::{KeywordScoring, RoleId, ScoringPolicy, TranscriptEntry};
/// use std::collections::BTreeMap;
///
/// let mut keywords = BTreeMap::new();
/// keywords.insert(RoleId::new("Scientist"), vec!["risk".to_string()]);
///
/// let policy = KeywordScoring::new(keywords);
/// let transcript = vec![TranscriptEntry::new(
///     "Philosopher",
///     "High-risk systems need oversight.",
///     1,
/// )];
/// let scores = policy.score(&transcript);
/// assert_eq!(scores[&RoleId::new("Scientist")], 1);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordScoring {
    keywords: BTreeMap<RoleId, Vec<String>>,
}

impl KeywordScoring {
    /// Create a policy from per-role keyword lists. Keywords are lowercased
    /// so the substring scan stays case-insensitive.
    pub fn new(keywords: BTreeMap<RoleId, Vec<String>>) -> Self {
        let keywords = keywords
            .into_iter()
            .map(|(role, words)| {
                let words = words.into_iter().map(|w| w.to_lowercase()).collect();
                (role, words)
            })
            .collect();
        Self { keywords }
    }

    /// Roles this policy scores
    pub fn roles(&self) -> impl Iterator<Item = &RoleId> {
        self.keywords.keys()
    }
}

impl ScoringPolicy for KeywordScoring {
    fn score(&self, transcript: &[TranscriptEntry]) -> BTreeMap<RoleId, u32> {
        let mut scores: BTreeMap<RoleId, u32> = self
            .keywords
            .keys()
            .map(|role| (role.clone(), 0))
            .collect();

        for entry in transcript {
            let text = entry.text.to_lowercase();
            for (role, words) in &self.keywords {
                let hits = words.iter().filter(|w| text.contains(w.as_str())).count() as u32;
                if let Some(total) = scores.get_mut(role) {
                    *total += hits;
                }
            }
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> KeywordScoring {
        let mut keywords = BTreeMap::new();
        keywords.insert(
            RoleId::new("Scientist"),
            vec!["Risk".to_string(), "safety".to_string()],
        );
        keywords.insert(RoleId::new("Philosopher"), vec!["freedom".to_string()]);
        KeywordScoring::new(keywords)
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let transcript = vec![TranscriptEntry::new("Scientist", "RISK everywhere", 1)];
        let scores = policy().score(&transcript);
        assert_eq!(scores[&RoleId::new("Scientist")], 1);
    }

    #[test]
    fn test_substring_matches_count() {
        // "high-risk" contains "risk"
        let transcript = vec![TranscriptEntry::new("Scientist", "high-risk uses", 1)];
        let scores = policy().score(&transcript);
        assert_eq!(scores[&RoleId::new("Scientist")], 1);
    }

    #[test]
    fn test_one_point_per_keyword_per_entry() {
        // "risk" appears twice in one entry but scores once
        let transcript = vec![TranscriptEntry::new(
            "Scientist",
            "risk upon risk, but safety too",
            1,
        )];
        let scores = policy().score(&transcript);
        assert_eq!(scores[&RoleId::new("Scientist")], 2);
    }

    #[test]
    fn test_scores_ignore_authorship() {
        let transcript = vec![TranscriptEntry::new("Scientist", "freedom matters", 1)];
        let scores = policy().score(&transcript);
        assert_eq!(scores[&RoleId::new("Philosopher")], 1);
        assert_eq!(scores[&RoleId::new("Scientist")], 0);
    }

    #[test]
    fn test_all_roles_present_even_with_zero_score() {
        let scores = policy().score(&[]);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[&RoleId::new("Philosopher")], 0);
    }
}
