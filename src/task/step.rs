//! A single planned unit of work.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status of a step in its lifecycle.
///
/// # State Machine
/// ```text
/// Pending -> Done
///        \-> Blocked
///        \-> Error
/// ```
///
/// All three non-pending states are terminal; the orchestrator never
/// revisits a step once it leaves `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step has not been executed yet
    Pending,
    /// Safety gate refused the step
    Blocked,
    /// Step executed and produced a result
    Done,
    /// Agent missing or agent execution failed
    Error,
}

impl StepStatus {
    /// Check if the step is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepStatus::Pending)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Blocked => write!(f, "blocked"),
            Self::Done => write!(f, "done"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One planned unit of work.
///
/// # Invariants
/// - `status` transitions only `Pending -> {Blocked | Done | Error}`
/// - Mutated exactly once, by the orchestrator, during execution
/// - Retained in the task's plan after execution for the final summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Human-readable description of what to accomplish
    pub description: String,

    /// Name of the worker agent that should execute this step
    pub agent_name: String,

    /// Arbitrary inputs for the agent
    #[serde(default)]
    pub inputs: HashMap<String, Value>,

    /// Result produced by the agent; absent until the step is done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Current status
    pub status: StepStatus,

    /// When execution of this step began
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When execution of this step finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,

    /// Wall-clock execution time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl Step {
    /// Create a pending step for the given agent.
    pub fn new(description: impl Into<String>, agent_name: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            agent_name: agent_name.into(),
            inputs: HashMap::new(),
            result: None,
            status: StepStatus::Pending,
            started_at: None,
            finished_at: None,
            duration_seconds: None,
        }
    }

    /// Attach inputs to the step.
    pub fn with_inputs(mut self, inputs: HashMap<String, Value>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Record the start timestamp.
    pub fn mark_started(&mut self) {
        self.started_at = Some(Utc::now());
    }

    /// Record the finish timestamp and elapsed duration.
    pub fn mark_finished(&mut self, duration_seconds: f64) {
        self.finished_at = Some(Utc::now());
        self.duration_seconds = Some(duration_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_step_is_pending_with_no_result() {
        let step = Step::new("look things up", "research");
        assert_eq!(step.status, StepStatus::Pending);
        assert!(step.result.is_none());
        assert!(step.started_at.is_none());
        assert!(!step.status.is_terminal());
    }

    #[test]
    fn mark_finished_records_duration() {
        let mut step = Step::new("x", "code");
        step.mark_started();
        step.mark_finished(1.5);
        assert!(step.started_at.is_some());
        assert!(step.finished_at.is_some());
        assert_eq!(step.duration_seconds, Some(1.5));
    }

    #[test]
    fn with_inputs_attaches_the_bag() {
        let mut inputs = HashMap::new();
        inputs.insert("depth".to_string(), serde_json::json!(2));
        let step = Step::new("dig in", "research").with_inputs(inputs);
        assert_eq!(step.inputs["depth"], serde_json::json!(2));
        assert_eq!(step.status, StepStatus::Pending);
    }

    #[test]
    fn non_pending_statuses_are_terminal() {
        assert!(StepStatus::Blocked.is_terminal());
        assert!(StepStatus::Done.is_terminal());
        assert!(StepStatus::Error.is_terminal());
    }
}
