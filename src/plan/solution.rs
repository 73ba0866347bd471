//! Planning solution: planned sequence plus unplanned set.
//!
//! The primitives here ([`exchange`], [`unschedule`], [`schedule_random_task`],
//! [`schedule_random_task_at`]) each keep the task universe partitioned, so
//! any sequence of them yields a valid plan.
//!
//! [`exchange`]: PlanningSolution::exchange
//! [`unschedule`]: PlanningSolution::unschedule
//! [`schedule_random_task`]: PlanningSolution::schedule_random_task
//! [`schedule_random_task_at`]: PlanningSolution::schedule_random_task_at

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PlannedTask;
use crate::error::{NrpError, Result};
use crate::problem::PlanningProblem;
use crate::random::RandomSource;

/// Candidate release plan.
///
/// Two plans are equal when they have the same planned sequence (same
/// order, same employees) and the same unplanned tasks in the same order.
///
/// Plain deserialisation does not check the plan against a problem; load
/// through [`PlanningSolution::from_json_str`] or call
/// [`PlanningSolution::validate`] afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSolution {
    planned: Vec<PlannedTask>,
    unplanned: Vec<String>,
}

impl PlanningSolution {
    /// Creates a plan where every task of the problem is unplanned.
    pub fn unplanned<P: PlanningProblem + ?Sized>(problem: &P) -> Self {
        Self {
            planned: Vec::new(),
            unplanned: problem.task_ids().into_iter().map(String::from).collect(),
        }
    }

    /// Creates a plan from explicit partitions, checking every invariant.
    pub fn from_parts<P: PlanningProblem + ?Sized>(
        problem: &P,
        planned: Vec<PlannedTask>,
        unplanned: Vec<String>,
    ) -> Result<Self> {
        let solution = Self { planned, unplanned };
        solution.validate(problem)?;
        Ok(solution)
    }

    /// Parses a JSON plan and checks every invariant against `problem`.
    pub fn from_json_str<P: PlanningProblem + ?Sized>(problem: &P, json: &str) -> Result<Self> {
        let solution: Self = serde_json::from_str(json)?;
        solution.validate(problem)?;
        Ok(solution)
    }

    /// Creates a random plan: a uniformly drawn number of tasks (0 to all)
    /// is scheduled, each with a random eligible employee.
    pub fn random<P, R>(problem: &P, rng: &mut R) -> Self
    where
        P: PlanningProblem + ?Sized,
        R: RandomSource + ?Sized,
    {
        let mut solution = Self::unplanned(problem);
        let to_plan = rng.next_index(0, problem.task_count() + 1);
        for _ in 0..to_plan {
            solution.schedule_random_task(problem, rng);
        }
        solution
    }

    /// Number of planned tasks.
    pub fn planned_count(&self) -> usize {
        self.planned.len()
    }

    /// Number of unplanned tasks.
    pub fn unplanned_count(&self) -> usize {
        self.unplanned.len()
    }

    /// Planned tasks in execution order.
    pub fn planned_tasks(&self) -> &[PlannedTask] {
        &self.planned
    }

    /// Unplanned task IDs.
    pub fn unplanned_tasks(&self) -> &[String] {
        &self.unplanned
    }

    /// The planned task at `position`.
    ///
    /// # Panics
    /// Panics if `position >= planned_count()`.
    pub fn planned_task(&self, position: usize) -> &PlannedTask {
        &self.planned[position]
    }

    /// Mutable access to the planned task at `position`.
    ///
    /// # Panics
    /// Panics if `position >= planned_count()`.
    pub fn planned_task_mut(&mut self, position: usize) -> &mut PlannedTask {
        &mut self.planned[position]
    }

    /// Whether a task is in the planned sequence.
    pub fn is_planned(&self, task_id: &str) -> bool {
        self.planned.iter().any(|pt| pt.task_id == task_id)
    }

    /// Swaps the bindings at positions `i` and `j`.
    ///
    /// Each task keeps its employee, so skill compliance is unaffected.
    ///
    /// # Panics
    /// Panics if either position is out of range.
    pub fn exchange(&mut self, i: usize, j: usize) {
        self.planned.swap(i, j);
    }

    /// Removes the binding at `position` and returns its task to the
    /// unplanned set.
    ///
    /// # Panics
    /// Panics if `position >= planned_count()`.
    pub fn unschedule(&mut self, position: usize) -> PlannedTask {
        let removed = self.planned.remove(position);
        self.unplanned.push(removed.task_id.clone());
        removed
    }

    /// Puts a previously unscheduled binding back at `position`, taking its
    /// task out of the unplanned set.
    ///
    /// Returns `false` (and changes nothing) if the task is not unplanned.
    ///
    /// # Panics
    /// Panics if `position > planned_count()`.
    pub fn reschedule(&mut self, position: usize, binding: PlannedTask) -> bool {
        match self.unplanned.iter().rposition(|t| *t == binding.task_id) {
            Some(idx) => {
                self.unplanned.remove(idx);
                self.planned.insert(position, binding);
                true
            }
            None => false,
        }
    }

    /// Plans a random unplanned task with a random eligible employee,
    /// appended at the end of the sequence.
    ///
    /// Returns the new position, or `None` when nothing could be planned.
    pub fn schedule_random_task<P, R>(&mut self, problem: &P, rng: &mut R) -> Option<usize>
    where
        P: PlanningProblem + ?Sized,
        R: RandomSource + ?Sized,
    {
        let position = self.planned.len();
        self.schedule_random_task_at(position, problem, rng)
    }

    /// Plans a random unplanned task with a random eligible employee,
    /// inserted at `position` (later bindings shift right).
    ///
    /// Returns `position`, or `None` when the unplanned set is empty or the
    /// drawn task has no eligible employee (it then stays unplanned).
    ///
    /// # Panics
    /// Panics if `position > planned_count()`.
    pub fn schedule_random_task_at<P, R>(
        &mut self,
        position: usize,
        problem: &P,
        rng: &mut R,
    ) -> Option<usize>
    where
        P: PlanningProblem + ?Sized,
        R: RandomSource + ?Sized,
    {
        assert!(
            position <= self.planned.len(),
            "insert position {position} beyond planned count {}",
            self.planned.len()
        );
        if self.unplanned.is_empty() {
            debug!("no unplanned task left to schedule");
            return None;
        }

        let idx = rng.next_index(0, self.unplanned.len());
        let task_id = self.unplanned.remove(idx);
        match rng.choose(problem.eligible_employees(&task_id)) {
            Some(employee_id) => {
                let binding = PlannedTask::new(task_id, employee_id.clone());
                self.planned.insert(position, binding);
                Some(position)
            }
            None => {
                debug!(task = %task_id, "no eligible employee, task left unplanned");
                self.unplanned.insert(idx, task_id);
                None
            }
        }
    }

    /// Checks the plan against the problem.
    ///
    /// 1. Every task of the universe is in exactly one partition.
    /// 2. Each bound employee holds the task's primary skill.
    /// 3. No task is planned twice.
    pub fn validate<P: PlanningProblem + ?Sized>(&self, problem: &P) -> Result<()> {
        let universe: HashSet<&str> = problem.task_ids().into_iter().collect();

        let mut planned_ids = HashSet::new();
        for pt in &self.planned {
            if !universe.contains(pt.task_id.as_str()) {
                return Err(NrpError::UnknownTask(pt.task_id.clone()));
            }
            if !planned_ids.insert(pt.task_id.as_str()) {
                return Err(NrpError::DuplicatePlannedTask(pt.task_id.clone()));
            }
            if !problem
                .eligible_employees(&pt.task_id)
                .contains(&pt.employee_id)
            {
                let skill = problem
                    .required_skills(&pt.task_id)
                    .first()
                    .cloned()
                    .unwrap_or_default();
                return Err(NrpError::MissingSkill {
                    task: pt.task_id.clone(),
                    employee: pt.employee_id.clone(),
                    skill,
                });
            }
        }

        let mut unplanned_ids = HashSet::new();
        for task_id in &self.unplanned {
            if !universe.contains(task_id.as_str()) {
                return Err(NrpError::UnknownTask(task_id.clone()));
            }
            if planned_ids.contains(task_id.as_str()) {
                return Err(NrpError::TaskInBothPartitions(task_id.clone()));
            }
            if !unplanned_ids.insert(task_id.as_str()) {
                return Err(NrpError::DuplicateUnplannedTask(task_id.clone()));
            }
        }

        for task_id in universe {
            if !planned_ids.contains(task_id) && !unplanned_ids.contains(task_id) {
                return Err(NrpError::MissingTask(task_id.to_string()));
            }
        }

        Ok(())
    }
}
