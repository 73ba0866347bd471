//! Problem-data provider for release planning.
//!
//! [`PlanningProblem`] is the read-only view plans and operators need:
//! the task universe, each task's required skills, and which employees
//! hold a given skill. [`NextReleaseProblem`] is the concrete registry
//! built from domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NrpError, Result};
use crate::models::{Employee, Skill, Task};
use crate::validation::validate_input;

/// Read-only registry of tasks, skills and employees.
pub trait PlanningProblem {
    /// Number of tasks in the task universe.
    fn task_count(&self) -> usize;

    /// All task IDs, in declaration order.
    fn task_ids(&self) -> Vec<&str>;

    /// Required skills of a task, primary skill first. Empty if unknown.
    fn required_skills(&self, task_id: &str) -> &[String];

    /// Employees holding a skill, in declaration order. Empty if none.
    fn employees_with_skill(&self, skill_id: &str) -> &[String];

    /// Employees allowed to perform a task: holders of its primary skill.
    fn eligible_employees(&self, task_id: &str) -> &[String] {
        match self.required_skills(task_id).first() {
            Some(skill) => self.employees_with_skill(skill),
            None => &[],
        }
    }
}

/// Concrete Next Release Problem instance.
///
/// # Example
/// ```
/// use u_nrp::models::{Employee, Task};
/// use u_nrp::problem::{NextReleaseProblem, PlanningProblem};
///
/// let problem = NextReleaseProblem::new(
///     vec![Task::new("T1").with_required_skill("S1")],
///     vec![Employee::new("E1").with_skill("S1")],
/// )
/// .unwrap();
/// assert_eq!(problem.task_count(), 1);
/// assert_eq!(problem.eligible_employees("T1"), ["E1".to_string()]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProblemInput", into = "ProblemInput")]
pub struct NextReleaseProblem {
    tasks: Vec<Task>,
    employees: Vec<Employee>,
    skills: Vec<Skill>,
    task_index: HashMap<String, usize>,
    employee_index: HashMap<String, usize>,
    skilled_employees: HashMap<String, Vec<String>>,
}

/// Serialized form: just the tasks and employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProblemInput {
    tasks: Vec<Task>,
    employees: Vec<Employee>,
}

impl TryFrom<ProblemInput> for NextReleaseProblem {
    type Error = NrpError;

    fn try_from(input: ProblemInput) -> Result<Self> {
        Self::new(input.tasks, input.employees)
    }
}

impl From<NextReleaseProblem> for ProblemInput {
    fn from(problem: NextReleaseProblem) -> Self {
        Self {
            tasks: problem.tasks,
            employees: problem.employees,
        }
    }
}

impl NextReleaseProblem {
    /// Builds and validates a problem instance.
    ///
    /// Fails with [`NrpError::InvalidProblem`] if the input has duplicate
    /// IDs, unstaffable tasks, bad predecessors or precedence cycles.
    pub fn new(tasks: Vec<Task>, employees: Vec<Employee>) -> Result<Self> {
        validate_input(&tasks, &employees).map_err(NrpError::InvalidProblem)?;

        let task_index = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        let employee_index = employees
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();

        let mut skills: Vec<Skill> = Vec::new();
        let mut skilled_employees: HashMap<String, Vec<String>> = HashMap::new();
        for employee in &employees {
            for skill in &employee.skills {
                let holders = skilled_employees.entry(skill.clone()).or_default();
                if holders.is_empty() {
                    skills.push(Skill::new(skill.clone()));
                }
                holders.push(employee.id.clone());
            }
        }
        for task in &tasks {
            for skill in &task.required_skills {
                if !skills.iter().any(|s| &s.id == skill) {
                    skills.push(Skill::new(skill.clone()));
                }
            }
        }

        debug!(
            tasks = tasks.len(),
            employees = employees.len(),
            skills = skills.len(),
            "next release problem built"
        );

        Ok(Self {
            tasks,
            employees,
            skills,
            task_index,
            employee_index,
            skilled_employees,
        })
    }

    /// All tasks, in declaration order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All employees, in declaration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Every skill mentioned by an employee or a task.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Looks up a task by ID.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.task_index.get(task_id).map(|&i| &self.tasks[i])
    }

    /// Looks up an employee by ID.
    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employee_index.get(employee_id).map(|&i| &self.employees[i])
    }
}

impl PlanningProblem for NextReleaseProblem {
    fn task_count(&self) -> usize {
        self.tasks.len()
    }

    fn task_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn required_skills(&self, task_id: &str) -> &[String] {
        self.task(task_id)
            .map(|t| t.required_skills.as_slice())
            .unwrap_or(&[])
    }

    fn employees_with_skill(&self, skill_id: &str) -> &[String] {
        self.skilled_employees
            .get(skill_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
