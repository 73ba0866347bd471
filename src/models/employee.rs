//! Employee model.
//!
//! Employees are the resources of a release plan. Each one holds a set
//! of skills; only employees holding a task's primary skill may be
//! assigned to it.

use serde::{Deserialize, Serialize};

/// An employee that can be assigned to planned tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Salary per hour (used by objective functions, not by mutation).
    pub salary: f64,
    /// Hours available per week.
    pub week_availability: f64,
    /// IDs of the skills this employee holds.
    pub skills: Vec<String>,
}

impl Employee {
    /// Creates a new employee with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            salary: 0.0,
            week_availability: 40.0,
            skills: Vec::new(),
        }
    }

    /// Sets the employee name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hourly salary.
    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = salary.max(0.0);
        self
    }

    /// Sets the weekly availability in hours.
    pub fn with_week_availability(mut self, hours: f64) -> Self {
        self.week_availability = hours.max(0.0);
        self
    }

    /// Adds a held skill.
    pub fn with_skill(mut self, skill_id: impl Into<String>) -> Self {
        let skill_id = skill_id.into();
        if !self.skills.contains(&skill_id) {
            self.skills.push(skill_id);
        }
        self
    }

    /// Whether this employee holds a given skill.
    pub fn has_skill(&self, skill_id: &str) -> bool {
        self.skills.iter().any(|s| s == skill_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new("E1")
            .with_name("Alice")
            .with_salary(35.0)
            .with_week_availability(32.0)
            .with_skill("S1")
            .with_skill("S2");

        assert_eq!(e.id, "E1");
        assert_eq!(e.name, "Alice");
        assert!((e.salary - 35.0).abs() < 1e-10);
        assert!((e.week_availability - 32.0).abs() < 1e-10);
        assert!(e.has_skill("S1"));
        assert!(e.has_skill("S2"));
        assert!(!e.has_skill("S3"));
    }

    #[test]
    fn test_duplicate_skill_ignored() {
        let e = Employee::new("E1").with_skill("S1").with_skill("S1");
        assert_eq!(e.skills.len(), 1);
    }

    #[test]
    fn test_negative_values_clamped() {
        let e = Employee::new("E1")
            .with_salary(-10.0)
            .with_week_availability(-1.0);
        assert_eq!(e.salary, 0.0);
        assert_eq!(e.week_availability, 0.0);
    }
}
