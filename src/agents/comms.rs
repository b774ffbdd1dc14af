//! Communications agent: explain results to a stakeholder.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Agent;
use crate::llm::ChatClient;
use crate::task::{Step, Task};
use crate::util::json_dump;

const SYSTEM: &str = "You are a communications agent. Turn the prior step results into a \
clear, concise explanation for a non-technical stakeholder.";

/// Summarizes everything the plan has produced so far.
///
/// Gathers `(description, result)` pairs from every prior step that has a
/// result and asks the model for a stakeholder-friendly write-up.
pub struct CommsAgent {
    llm: Arc<dyn ChatClient>,
}

impl CommsAgent {
    pub fn new(llm: Arc<dyn ChatClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Agent for CommsAgent {
    fn name(&self) -> &str {
        "comms"
    }

    async fn run(&self, step: &Step, task: &Task) -> anyhow::Result<Value> {
        let prior_results: Vec<Value> = task
            .plan
            .iter()
            .filter(|s| s.result.is_some())
            .map(|s| json!({"description": s.description, "result": s.result}))
            .collect();

        let summary = self
            .llm
            .chat(
                SYSTEM,
                &json_dump(&json!({
                    "objective": task.objective,
                    "step": step.description,
                    "prior_results": prior_results,
                })),
            )
            .await?;
        Ok(Value::String(summary))
    }
}
