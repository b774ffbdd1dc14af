//! Safety hooks around step execution.
//!
//! Two extension points: a gate consulted before each step runs and a
//! filter applied to each step's result. The shipped implementation allows
//! everything and passes results through unchanged; real deployments can
//! implement [`SafetyHook`] to enforce policy.

use std::collections::HashMap;

use serde_json::Value;

use crate::task::{Step, Task};

/// Pre-step gate and post-step result filter.
pub trait SafetyHook: Send + Sync {
    /// Whether the orchestrator may execute this step. Returning `false`
    /// blocks the step and halts the rest of the plan.
    fn allowed_to_proceed(&self, _task: &Task, _step: &Step) -> bool {
        true
    }

    /// Filter an agent result before it is stored on the step.
    fn post_process(&self, result: Value) -> Value {
        result
    }
}

/// Permissive hook carrying an opaque policy map.
///
/// The policies are not consulted yet; they are kept so a configured
/// deployment can attach rules without changing the wiring.
#[derive(Debug, Default)]
pub struct PolicySafety {
    policies: HashMap<String, Value>,
}

impl PolicySafety {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policies(policies: HashMap<String, Value>) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &HashMap<String, Value> {
        &self.policies
    }
}

impl SafetyHook for PolicySafety {}
