//! Task model.
//!
//! A task is a unit of work that may be included in a release plan.
//! It requires an ordered list of skills; staffing decisions consult
//! only the first one (the primary skill).

use serde::{Deserialize, Serialize};

/// A task that may be planned in a release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Estimated effort in hours.
    pub duration: f64,
    /// Business priority (higher = more important).
    pub priority: i32,
    /// Required skill IDs, primary skill first.
    pub required_skills: Vec<String>,
    /// IDs of tasks that must precede this one.
    pub predecessors: Vec<String>,
}

impl Task {
    /// Creates a new task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration: 0.0,
            priority: 0,
            required_skills: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the estimated effort in hours.
    pub fn with_duration(mut self, hours: f64) -> Self {
        self.duration = hours.max(0.0);
        self
    }

    /// Sets the business priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Appends a required skill. The first one added is the primary skill.
    pub fn with_required_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.required_skills.push(skill_id.into());
        self
    }

    /// Adds a predecessor task.
    pub fn with_predecessor(mut self, task_id: impl Into<String>) -> Self {
        self.predecessors.push(task_id.into());
        self
    }

    /// The skill used to decide which employees may perform this task.
    pub fn primary_skill(&self) -> Option<&str> {
        self.required_skills.first().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1")
            .with_name("Login page")
            .with_duration(16.0)
            .with_priority(3)
            .with_required_skill("frontend")
            .with_required_skill("design")
            .with_predecessor("T0");

        assert_eq!(task.id, "T1");
        assert_eq!(task.name, "Login page");
        assert!((task.duration - 16.0).abs() < 1e-10);
        assert_eq!(task.priority, 3);
        assert_eq!(task.required_skills, vec!["frontend", "design"]);
        assert_eq!(task.predecessors, vec!["T0"]);
    }

    #[test]
    fn test_primary_skill_is_first() {
        let task = Task::new("T1")
            .with_required_skill("S2")
            .with_required_skill("S1");
        assert_eq!(task.primary_skill(), Some("S2"));
    }

    #[test]
    fn test_no_primary_skill() {
        assert_eq!(Task::new("T1").primary_skill(), None);
    }
}
