//! Role identity value object

use serde::{Deserialize, Serialize};

/// Identifies one debating participant (Value Object)
///
/// Role ids are plain strings (e.g. "Scientist", "Philosopher") so that
/// configuration can introduce arbitrary pairings. `Ord` is derived to give
/// score and count maps a stable iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    /// Create a new role id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the role id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoleId {
    fn from(s: &str) -> Self {
        RoleId::new(s)
    }
}

impl From<String> for RoleId {
    fn from(s: String) -> Self {
        RoleId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_id_display() {
        let role = RoleId::new("Scientist");
        assert_eq!(role.to_string(), "Scientist");
    }

    #[test]
    fn test_role_id_from_str() {
        let role: RoleId = "Philosopher".into();
        assert_eq!(role.as_str(), "Philosopher");
    }

    #[test]
    fn test_role_id_ordering_is_stable() {
        let mut roles = vec![RoleId::new("Scientist"), RoleId::new("Philosopher")];
        roles.sort();
        assert_eq!(roles[0].as_str(), "Philosopher");
    }

    #[test]
    fn test_role_id_serializes_transparently() {
        let role = RoleId::new("Scientist");
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"Scientist\"");
    }
}
