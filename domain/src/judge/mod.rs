//! Deterministic debate adjudication.
//!
//! - [`verdict::Verdict`] — the judge's immutable output
//! - [`policy::ScoringPolicy`] — pluggable transcript scoring
//! - [`Judge`] — counts, coherence scan, scoring, winner selection

pub mod policy;
pub mod verdict;

use crate::core::role::RoleId;
use crate::transcript::entry::TranscriptEntry;
use policy::ScoringPolicy;
use std::collections::BTreeMap;
use verdict::{CoherenceIssue, Verdict};

/// One side as the judge sees it: a role plus the fixed reason string
/// attached when that side wins.
#[derive(Debug, Clone)]
pub struct JudgeProfile {
    pub role: RoleId,
    pub reason: String,
}

impl JudgeProfile {
    pub fn new(role: impl Into<RoleId>, reason: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            reason: reason.into(),
        }
    }
}

/// Adjudicates a completed transcript
///
/// The judge holds no state between evaluations; `evaluate` is a pure
/// function of the transcript, so repeated calls yield identical verdicts.
/// Ties go to the favored profile.
pub struct Judge {
    favored: JudgeProfile,
    challenger: JudgeProfile,
    policy: Box<dyn ScoringPolicy>,
}

impl Judge {
    /// Create a judge. `favored` wins whenever its score is at least the
    /// challenger's.
    pub fn new(favored: JudgeProfile, challenger: JudgeProfile, policy: Box<dyn ScoringPolicy>) -> Self {
        Self {
            favored,
            challenger,
            policy,
        }
    }

    /// Evaluate the full transcript and return the verdict.
    pub fn evaluate(&self, transcript: &[TranscriptEntry]) -> Verdict {
        // Structural counts: entries per role.
        let mut counts: BTreeMap<RoleId, u32> = BTreeMap::new();
        for entry in transcript {
            *counts.entry(entry.role.clone()).or_insert(0) += 1;
        }

        // Coherence: adjacent exact duplicates, diagnostic only.
        let mut coherence_issues = Vec::new();
        for i in 1..transcript.len() {
            if transcript[i].text == transcript[i - 1].text {
                coherence_issues.push(CoherenceIssue {
                    index: i,
                    text: transcript[i].text.clone(),
                });
            }
        }

        let scores = self.policy.score(transcript);
        let favored_score = scores.get(&self.favored.role).copied().unwrap_or(0);
        let challenger_score = scores.get(&self.challenger.role).copied().unwrap_or(0);

        let (winner, reason) = if favored_score >= challenger_score {
            (self.favored.role.clone(), self.favored.reason.clone())
        } else {
            (self.challenger.role.clone(), self.challenger.reason.clone())
        };

        Verdict {
            winner,
            reason,
            scores,
            counts,
            coherence_issues,
        }
    }
}
