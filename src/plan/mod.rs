//! Release plan encoding.
//!
//! A plan splits the task universe into two partitions:
//! - **Planned**: ordered sequence of (task, employee) bindings. Order is
//!   the execution sequence.
//! - **Unplanned**: tasks left out of the release.
//!
//! Every task appears in exactly one partition, no task is planned twice,
//! and each bound employee holds the primary skill of its task.

mod planned_task;
mod solution;

pub use planned_task::PlannedTask;
pub use solution::PlanningSolution;
