//! Next Release Problem domain models.
//!
//! | u-nrp | Meaning |
//! |-------|---------|
//! | Task | Unit of work that may enter the release |
//! | Employee | Person who can be assigned to tasks |
//! | Skill | Capability gating task/employee compatibility |

mod employee;
mod skill;
mod task;

pub use employee::Employee;
pub use skill::Skill;
pub use task::Task;
