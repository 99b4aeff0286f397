//! Domain error types

use crate::core::role::RoleId;
use thiserror::Error;

/// Domain-level errors
///
/// The running debate itself cannot fail (missing script lines degrade to
/// placeholders, repeated lines are suffixed), so these only surface while
/// a debate is being configured.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("A debate requires at least one round")]
    NoRounds,

    #[error("Both sides of the debate use the same role: {0}")]
    DuplicateRole(RoleId),

    #[error("A debate requires exactly two participants, got {0}")]
    WrongParticipantCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rounds_display() {
        let error = DomainError::NoRounds;
        assert_eq!(error.to_string(), "A debate requires at least one round");
    }

    #[test]
    fn test_duplicate_role_names_the_role() {
        let error = DomainError::DuplicateRole(RoleId::new("Scientist"));
        assert!(error.to_string().contains("Scientist"));
    }
}
