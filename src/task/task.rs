//! The user-facing job record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::Step;
use crate::util::now_iso;

/// Unique identifier for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Create a new unique task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a task.
///
/// `Error` is set when execution aborts on an agent failure; `Completed`
/// means the step loop ran to its end, even if individual steps were
/// blocked or hit an unknown agent name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Error,
}

/// One user-facing job.
///
/// # Invariants
/// - `plan` is immutable in length and order once execution starts; steps
///   are mutated in place, never inserted, removed, or reordered
/// - `logs` is append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task
    pub id: TaskId,

    /// Identifier of the user this job belongs to (memory namespace)
    pub user_id: String,

    /// What the user wants accomplished
    pub objective: String,

    /// Scratch data: retrieved memory, final answer, anything the caller
    /// wants to carry along
    #[serde(default)]
    pub context: HashMap<String, Value>,

    /// Ordered execution plan
    #[serde(default)]
    pub plan: Vec<Step>,

    /// Current status
    pub status: TaskStatus,

    /// Timestamped execution log lines
    #[serde(default)]
    pub logs: Vec<String>,
}

impl Task {
    /// Create a pending task with an empty plan.
    pub fn new(user_id: impl Into<String>, objective: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            user_id: user_id.into(),
            objective: objective.into(),
            context: HashMap::new(),
            plan: Vec::new(),
            status: TaskStatus::Pending,
            logs: Vec::new(),
        }
    }

    /// Append a timestamped line to the task log.
    pub fn append_log(&mut self, message: impl AsRef<str>) {
        self.logs.push(format!("[{}] {}", now_iso(), message.as_ref()));
    }

    /// The final synthesized answer, if the task has been handled.
    pub fn final_answer(&self) -> Option<&str> {
        self.context.get("final_answer").and_then(Value::as_str)
    }
}
