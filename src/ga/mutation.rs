//! Per-slot stochastic mutation of release plans.
//!
//! For each planned slot, a Bernoulli trial with the mutation probability
//! decides whether it mutates; a mutating slot either gets a new employee
//! or a new task (equal odds). Then one more trial per task that was
//! unplanned at the start decides whether to plan an extra random task.
//!
//! # Task replacement
//!
//! A uniform index `r` in `[0, task_count)` is drawn. If `r + 1 < planned_count`
//! the slot swaps with slot `r` (moved to `r + 1` when it hits the slot
//! itself). Otherwise the slot's task goes back to the unplanned set and a
//! random unplanned task takes over the same position.
//!
//! The swap band stops one short of the last slot, so after the `r + 1`
//! shift the partner index is always in range. The last slot can only be
//! reached through that shift.
//!
//! Degenerate cases (a single eligible employee, nothing to plan, a drawn
//! replacement nobody can staff) leave the slot unchanged.

use tracing::{debug, trace};

use super::MutationOperator;
use crate::config::MutationConfig;
use crate::error::{NrpError, Result};
use crate::plan::{PlannedTask, PlanningSolution};
use crate::problem::PlanningProblem;
use crate::random::RandomSource;

/// Mutation operator for [`PlanningSolution`].
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_nrp::ga::{MutationOperator, PlanningMutationOperator};
/// use u_nrp::models::{Employee, Task};
/// use u_nrp::plan::PlanningSolution;
/// use u_nrp::problem::NextReleaseProblem;
///
/// let problem = NextReleaseProblem::new(
///     vec![Task::new("T1").with_required_skill("S1")],
///     vec![Employee::new("E1").with_skill("S1")],
/// )
/// .unwrap();
/// let op = PlanningMutationOperator::new(&problem, 1.0).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let parent = PlanningSolution::unplanned(&problem);
/// let child = op.mutate(&parent, &mut rng);
/// assert_eq!(child.planned_count(), 1);
/// assert_eq!(parent.planned_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct PlanningMutationOperator<'a, P: PlanningProblem + ?Sized> {
    problem: &'a P,
    mutation_probability: f64,
}

impl<'a, P: PlanningProblem + ?Sized> PlanningMutationOperator<'a, P> {
    /// Creates an operator.
    ///
    /// Fails with [`NrpError::NegativeProbability`] if `mutation_probability < 0`
    /// and with [`NrpError::NanProbability`] if it is NaN.
    pub fn new(problem: &'a P, mutation_probability: f64) -> Result<Self> {
        if mutation_probability.is_nan() {
            return Err(NrpError::NanProbability);
        }
        if mutation_probability < 0.0 {
            return Err(NrpError::NegativeProbability(mutation_probability));
        }
        Ok(Self {
            problem,
            mutation_probability,
        })
    }

    /// Creates an operator from configuration.
    pub fn from_config(problem: &'a P, config: &MutationConfig) -> Result<Self> {
        Self::new(problem, config.mutation_probability)
    }

    /// The configured per-slot mutation probability.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    fn do_mutation<R: RandomSource + ?Sized>(&self, rng: &mut R) -> bool {
        rng.next_f64() <= self.mutation_probability
    }

    /// Reassigns a planned task to a random holder of its primary skill.
    ///
    /// The draw may return the current employee. No-op when fewer than two
    /// employees are eligible.
    pub fn change_employee<R: RandomSource + ?Sized>(
        &self,
        planned_task: &mut PlannedTask,
        rng: &mut R,
    ) {
        let eligible = self.problem.eligible_employees(&planned_task.task_id);
        if eligible.len() <= 1 {
            debug!(
                task = %planned_task.task_id,
                eligible = eligible.len(),
                "employee change skipped"
            );
            return;
        }
        if let Some(employee_id) = rng.choose(eligible) {
            planned_task.set_employee(employee_id.clone());
        }
    }

    /// Swaps the slot at `position` with another planned slot, or replaces
    /// its task with a random unplanned one.
    ///
    /// # Panics
    /// Panics if `position >= solution.planned_count()`.
    pub fn change_task<R: RandomSource + ?Sized>(
        &self,
        solution: &mut PlanningSolution,
        position: usize,
        rng: &mut R,
    ) {
        let mut other = rng.next_index(0, self.problem.task_count());
        if other + 1 < solution.planned_count() {
            if other == position {
                other += 1;
            }
            trace!(position, other, "exchange planned tasks");
            solution.exchange(position, other);
        } else {
            let removed = solution.unschedule(position);
            if solution
                .schedule_random_task_at(position, self.problem, rng)
                .is_none()
            {
                debug!(task = %removed.task_id, position, "replacement failed, slot kept");
                solution.reschedule(position, removed);
            }
        }
    }
}

impl<P: PlanningProblem + ?Sized> MutationOperator<PlanningSolution>
    for PlanningMutationOperator<'_, P>
{
    fn mutate<R: RandomSource + ?Sized>(
        &self,
        parent: &PlanningSolution,
        rng: &mut R,
    ) -> PlanningSolution {
        let mut child = parent.clone();
        let planned = child.planned_count();
        let mut mutated = 0usize;

        for i in 0..planned {
            if !self.do_mutation(rng) {
                continue;
            }
            mutated += 1;
            if rng.next_f64() < 0.5 {
                self.change_employee(child.planned_task_mut(i), rng);
            } else {
                self.change_task(&mut child, i, rng);
            }
        }

        let mut added = 0usize;
        for _ in planned..self.problem.task_count() {
            if self.do_mutation(rng) && child.schedule_random_task(self.problem, rng).is_some() {
                added += 1;
            }
        }

        trace!(
            planned,
            mutated,
            added,
            result = child.planned_count(),
            "plan mutated"
        );
        child
    }
}
