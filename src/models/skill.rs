//! Skill model.
//!
//! A skill is a capability category. Employees hold skills and tasks
//! require them; task/employee compatibility is gated on possession.

use serde::{Deserialize, Serialize};

/// A capability category held by employees and required by tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    /// Unique skill identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Skill {
    /// Creates a new skill with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the skill name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_builder() {
        let s = Skill::new("S1").with_name("Rust");
        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Rust");
    }
}
