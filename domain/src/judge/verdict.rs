//! Verdict value objects - the judge's immutable output.

use crate::core::role::RoleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pair of adjacent transcript entries with identical text.
///
/// `index` is the position of the later entry. Diagnostic only; coherence
/// issues never influence the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceIssue {
    pub index: usize,
    pub text: String,
}

/// The judge's final output (Value Object)
///
/// Computed once from the full transcript and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// The winning role
    pub winner: RoleId,
    /// Fixed reason string for the winning branch
    pub reason: String,
    /// Heuristic score per role
    pub scores: BTreeMap<RoleId, u32>,
    /// Entries spoken per role
    pub counts: BTreeMap<RoleId, u32>,
    /// Adjacent exact-duplicate diagnostics
    pub coherence_issues: Vec<CoherenceIssue>,
}
