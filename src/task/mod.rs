//! Task and plan data model.
//!
//! A [`Task`] is one user-facing job: an objective, the generated plan, the
//! execution log trail, and a scratch context holding retrieved memory and
//! the final answer. A [`Step`] is one planned unit of work, routed to a
//! worker agent by name and mutated exactly once during execution.

mod step;
#[allow(clippy::module_inception)]
mod task;

pub use step::{Step, StepStatus};
pub use task::{Task, TaskId, TaskStatus};
