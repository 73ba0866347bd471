//! Input validation for release planning problems.
//!
//! Checks structural integrity of tasks and employees before planning.
//! Detects:
//! - Duplicate IDs
//! - Tasks without any required skill
//! - Tasks whose primary skill no employee holds
//! - Missing predecessor references
//! - Circular precedence dependencies (DAG validation)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Employee, Task};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task requires no skill at all.
    MissingSkillRequirement,
    /// No employee holds the primary skill of a task.
    UnstaffableTask,
    /// A task references a predecessor that doesn't exist.
    InvalidPredecessor,
    /// Precedence graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates the input data for a release planning problem.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. No duplicate employee IDs
/// 3. Every task requires at least one skill
/// 4. Every task's primary skill is held by at least one employee
/// 5. All predecessor references point to existing tasks
/// 6. No circular precedence dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], employees: &[Employee]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut employee_ids = HashSet::new();
    let mut held_skills = HashSet::new();
    for e in employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        held_skills.extend(e.skills.iter().map(|s| s.as_str()));
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        match task.primary_skill() {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingSkillRequirement,
                format!("Task '{}' requires no skill", task.id),
            )),
            Some(skill) if !held_skills.contains(skill) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnstaffableTask,
                    format!(
                        "Task '{}' requires skill '{}' which no employee holds",
                        task.id, skill
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    for task in tasks {
        for pred in &task.predecessors {
            if !task_ids.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPredecessor,
                    format!(
                        "Task '{}' references unknown predecessor '{}'",
                        task.id, pred
                    ),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(tasks) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the task precedence graph using DFS.
///
/// A back-edge (visiting a node currently in the recursion stack)
/// means a cycle exists.
fn detect_cycles(tasks: &[Task]) -> Option<ValidationError> {
    // predecessor → successors
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for task in tasks {
        for pred in &task.predecessors {
            adj.entry(pred.as_str()).or_default().push(task.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true;
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employees() -> Vec<Employee> {
        vec![
            Employee::new("E1").with_skill("backend"),
            Employee::new("E2").with_skill("backend").with_skill("frontend"),
        ]
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("T1").with_required_skill("backend"),
            Task::new("T2")
                .with_required_skill("frontend")
                .with_predecessor("T1"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_tasks(), &sample_employees()).is_ok());
    }

    #[test]
    fn test_duplicate_task_id() {
        let tasks = vec![
            Task::new("T1").with_required_skill("backend"),
            Task::new("T1").with_required_skill("backend"),
        ];

        let errors = validate_input(&tasks, &sample_employees()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("task")));
    }

    #[test]
    fn test_duplicate_employee_id() {
        let employees = vec![
            Employee::new("E1").with_skill("backend"),
            Employee::new("E1").with_skill("frontend"),
        ];

        let errors = validate_input(&sample_tasks(), &employees).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("employee")));
    }

    #[test]
    fn test_task_without_skill() {
        let tasks = vec![Task::new("T1")];

        let errors = validate_input(&tasks, &sample_employees()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingSkillRequirement));
    }

    #[test]
    fn test_unstaffable_task() {
        // Only the primary skill counts: "backend" is held, "ops" is not.
        let tasks = vec![Task::new("T1")
            .with_required_skill("ops")
            .with_required_skill("backend")];

        let errors = validate_input(&tasks, &sample_employees()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnstaffableTask));
    }

    #[test]
    fn test_secondary_skill_not_checked() {
        let tasks = vec![Task::new("T1")
            .with_required_skill("backend")
            .with_required_skill("ops")];

        assert!(validate_input(&tasks, &sample_employees()).is_ok());
    }

    #[test]
    fn test_invalid_predecessor() {
        let tasks = vec![Task::new("T1")
            .with_required_skill("backend")
            .with_predecessor("NONEXISTENT")];

        let errors = validate_input(&tasks, &sample_employees()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPredecessor));
    }

    #[test]
    fn test_cyclic_dependency() {
        // T1 → T2 → T3 → T1
        let tasks = vec![
            Task::new("T1")
                .with_required_skill("backend")
                .with_predecessor("T3"),
            Task::new("T2")
                .with_required_skill("backend")
                .with_predecessor("T1"),
            Task::new("T3")
                .with_required_skill("backend")
                .with_predecessor("T2"),
        ];

        let errors = validate_input(&tasks, &sample_employees()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicDependency));
    }

    #[test]
    fn test_multiple_errors() {
        let tasks = vec![
            Task::new("T1"),
            Task::new("T2")
                .with_required_skill("ops")
                .with_predecessor("UNKNOWN"),
        ];

        let errors = validate_input(&tasks, &[]).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
