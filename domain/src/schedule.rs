//! Turn order and debate phases

use crate::core::error::DomainError;
use crate::core::role::RoleId;

/// Stage of a debate run
///
/// A run walks the phases strictly forward: topic collection, then one
/// `Debating` state per round, then adjudication. There is no abort or
/// rollback path; once started, a debate always reaches `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebatePhase {
    /// Waiting for the external topic source
    AwaitingTopic,
    /// Round in progress (1-indexed)
    Debating(u32),
    /// All rounds spoken; judge is evaluating
    Adjudicating,
    /// Verdict delivered
    Done,
}

impl DebatePhase {
    /// True once the verdict has been delivered
    pub fn is_done(&self) -> bool {
        matches!(self, DebatePhase::Done)
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebatePhase::AwaitingTopic => write!(f, "AwaitingTopic"),
            DebatePhase::Debating(round) => write!(f, "Debating(round {})", round),
            DebatePhase::Adjudicating => write!(f, "Adjudicating"),
            DebatePhase::Done => write!(f, "Done"),
        }
    }
}

/// Strict alternation schedule for a fixed number of rounds (Value Object)
///
/// Odd rounds belong to the configured first speaker, even rounds to the
/// second. Construction rejects the configurations the debate loop has no
/// defined behavior for: zero rounds and a debate against oneself.
#[derive(Debug, Clone)]
pub struct TurnOrder {
    first: RoleId,
    second: RoleId,
    rounds: u32,
}

impl TurnOrder {
    /// Create a schedule of `rounds` rounds, `first` speaking round 1.
    pub fn new(
        first: impl Into<RoleId>,
        second: impl Into<RoleId>,
        rounds: u32,
    ) -> Result<Self, DomainError> {
        let first = first.into();
        let second = second.into();

        if rounds == 0 {
            return Err(DomainError::NoRounds);
        }
        if first == second {
            return Err(DomainError::DuplicateRole(first));
        }

        Ok(Self {
            first,
            second,
            rounds,
        })
    }

    /// Total number of rounds in the debate
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Both roles, first speaker first
    pub fn roles(&self) -> (&RoleId, &RoleId) {
        (&self.first, &self.second)
    }

    /// The role that speaks in `round` (1-indexed)
    pub fn speaker_for(&self, round: u32) -> &RoleId {
        if round % 2 == 1 {
            &self.first
        } else {
            &self.second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rounds_rejected() {
        let result = TurnOrder::new("Scientist", "Philosopher", 0);
        assert!(matches!(result, Err(DomainError::NoRounds)));
    }

    #[test]
    fn test_same_role_on_both_sides_rejected() {
        let result = TurnOrder::new("Scientist", "Scientist", 8);
        assert!(matches!(result, Err(DomainError::DuplicateRole(_))));
    }

    #[test]
    fn test_alternation_starts_with_first_speaker() {
        let order = TurnOrder::new("Scientist", "Philosopher", 8).unwrap();
        assert_eq!(order.speaker_for(1).as_str(), "Scientist");
        assert_eq!(order.speaker_for(2).as_str(), "Philosopher");
    }

    #[test]
    fn test_alternation_holds_for_every_round() {
        let order = TurnOrder::new("Scientist", "Philosopher", 9).unwrap();
        let mut previous: Option<RoleId> = None;
        for round in 1..=order.rounds() {
            let speaker = order.speaker_for(round).clone();
            if let Some(prev) = previous {
                assert_ne!(prev, speaker, "round {} repeated a speaker", round);
            }
            previous = Some(speaker);
        }
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(DebatePhase::AwaitingTopic.to_string(), "AwaitingTopic");
        assert_eq!(DebatePhase::Debating(3).to_string(), "Debating(round 3)");
        assert!(DebatePhase::Done.is_done());
        assert!(!DebatePhase::Adjudicating.is_done());
    }
}
