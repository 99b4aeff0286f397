//! Domain layer for agent-debate
//!
//! This crate contains the core debate entities and decision logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The [`transcript::MemoryStore`] owns the append-only record of every
//! utterance. Each debater only ever sees the store through a derived
//! [`transcript::ContextualView`], recomputed on every request.
//!
//! ## Turn-taking
//!
//! A debate is a fixed number of rounds, strictly alternating between two
//! roles. [`schedule::TurnOrder`] decides who speaks in which round;
//! [`schedule::DebatePhase`] names the stages of a run.
//!
//! ## Adjudication
//!
//! The [`judge::Judge`] is a pure function of the completed transcript:
//! structural counts, an adjacent-duplicate coherence scan, and a pluggable
//! [`judge::ScoringPolicy`] that picks the winner deterministically.

pub mod core;
pub mod debater;
pub mod judge;
pub mod schedule;
pub mod transcript;

// Re-export commonly used types
pub use core::{error::DomainError, role::RoleId, topic::Topic};
pub use debater::{Debater, EXPANSION_MARKER};
pub use judge::{
    Judge, JudgeProfile,
    policy::{KeywordScoring, ScoringPolicy},
    verdict::{CoherenceIssue, Verdict},
};
pub use schedule::{DebatePhase, TurnOrder};
pub use transcript::{ContextualView, MemoryStore, RECENT_WINDOW, TranscriptEntry};
