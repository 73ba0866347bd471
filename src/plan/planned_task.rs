use serde::{Deserialize, Serialize};

/// A task bound to the employee performing it.
///
/// Its position is its index in [`PlanningSolution::planned_tasks`].
///
/// [`PlanningSolution::planned_tasks`]: super::PlanningSolution::planned_tasks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlannedTask {
    /// Planned task ID.
    pub task_id: String,
    /// Assigned employee ID.
    pub employee_id: String,
}

impl PlannedTask {
    /// Binds a task to an employee.
    pub fn new(task_id: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            employee_id: employee_id.into(),
        }
    }

    /// Reassigns the task to another employee.
    pub fn set_employee(&mut self, employee_id: impl Into<String>) {
        self.employee_id = employee_id.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_employee() {
        let mut pt = PlannedTask::new("T1", "E1");
        pt.set_employee("E2");
        assert_eq!(pt, PlannedTask::new("T1", "E2"));
    }
}
