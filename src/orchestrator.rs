//! The orchestration loop: plan, execute, summarize.
//!
//! [`Orchestrator::handle_task`] drives one task end to end:
//!
//! 1. Retrieve recent memory for the user and stash it in the task context.
//! 2. Ask the model for a plan; fall back to a single research step when the
//!    plan cannot be decoded or comes back empty.
//! 3. Execute each step in plan order, strictly sequentially, consulting the
//!    safety gate before and the result filter after each one.
//! 4. Always synthesize a final answer from the full plan, whether or not
//!    the loop ran to completion.
//!
//! Nothing escapes `handle_task` as an error: agent failures are recorded
//! into the step and the task, and the caller always gets the task back
//! with a best-effort `final_answer` and a log trail.

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::agents::{AgentKind, AgentRoster};
use crate::config::OrchestratorConfig;
use crate::llm::ChatClient;
use crate::memory::MemoryLayer;
use crate::safety::{PolicySafety, SafetyHook};
use crate::task::{Step, StepStatus, Task, TaskStatus};
use crate::tools::ToolRegistry;
use crate::util::{json_dump, parse_json};

const PLANNER_SYSTEM: &str = "You are a planner. Given a user objective and context, \
break it into 2-5 concrete steps. For each, choose an agent from: \
['research', 'code', 'comms']. Respond ONLY as strict JSON: \
{ \"steps\": [ {\"description\": \"...\", \"agent_name\": \"...\"}, ... ] }";

const ANALYST_SYSTEM: &str = "You are a senior analyst. Given the objective and the list \
of steps+results, produce a clear, actionable final answer.";

/// Why a model response could not be turned into a plan.
///
/// Recovered locally via the fallback plan; never surfaced to the caller.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner chat call failed: {0}")]
    Chat(String),

    #[error("plan JSON malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct PlanDocument {
    #[serde(default)]
    steps: Vec<PlanEntry>,
}

#[derive(Debug, Deserialize)]
struct PlanEntry {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    agent_name: Option<String>,
}

/// Decode a model plan response into steps.
///
/// Tolerant by design: markdown fences are stripped before parsing and
/// entries missing either field are skipped. An empty `steps` array (or a
/// missing one) decodes to an empty vec; the caller decides whether to fall
/// back. There is no retry of the chat call on failure.
pub fn decode_plan(raw: &str) -> Result<Vec<Step>, PlanError> {
    let value = parse_json(raw)?;
    let document: PlanDocument = serde_json::from_value(value)?;
    let steps = document
        .steps
        .into_iter()
        .filter_map(|entry| match (entry.description, entry.agent_name) {
            (Some(description), Some(agent_name))
                if !description.is_empty() && !agent_name.is_empty() =>
            {
                Some(Step::new(description, agent_name))
            }
            _ => None,
        })
        .collect();
    Ok(steps)
}

/// Drives tasks through plan generation, step dispatch, and summarization.
pub struct Orchestrator {
    llm: Arc<dyn ChatClient>,
    roster: AgentRoster,
    memory: Arc<MemoryLayer>,
    safety: Arc<dyn SafetyHook>,
    config: OrchestratorConfig,
}

impl Orchestrator {
    pub fn new(
        llm: Arc<dyn ChatClient>,
        roster: AgentRoster,
        memory: Arc<MemoryLayer>,
        safety: Arc<dyn SafetyHook>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            llm,
            roster,
            memory,
            safety,
            config,
        }
    }

    /// Default wiring: built-in tools, fresh in-memory stores, permissive
    /// safety, and the three shipped agents.
    pub fn with_defaults(llm: Arc<dyn ChatClient>) -> Self {
        Self::with_config(llm, OrchestratorConfig::default())
    }

    /// Default wiring with explicit configuration.
    pub fn with_config(llm: Arc<dyn ChatClient>, config: OrchestratorConfig) -> Self {
        let tools = Arc::new(ToolRegistry::with_defaults());
        let roster = AgentRoster::with_defaults(Arc::clone(&llm), tools, &config);
        Self::new(
            llm,
            roster,
            Arc::new(MemoryLayer::new()),
            Arc::new(PolicySafety::new()),
            config,
        )
    }

    /// The shared memory layer (outlives any single task).
    pub fn memory(&self) -> &Arc<MemoryLayer> {
        &self.memory
    }

    /// Run one task to completion and return it.
    ///
    /// Status policy: the task finishes `Completed` unless an agent failure
    /// aborted the loop, in which case the `Error` status set inside the
    /// loop is preserved. Blocked steps and unknown agent names do not
    /// prevent `Completed`. A final answer is synthesized in every case.
    pub async fn handle_task(&self, mut task: Task) -> Task {
        info!(task_id = %task.id, user_id = %task.user_id, "handling task");

        let episodes =
            self.memory
                .retrieve_relevant(&task.user_id, &task.objective, self.config.memory_top_k);
        task.context.insert(
            "memory".to_string(),
            serde_json::to_value(&episodes).unwrap_or(Value::Null),
        );

        task.plan = self.create_plan(&mut task).await;

        for idx in 0..task.plan.len() {
            if !self.safety.allowed_to_proceed(&task, &task.plan[idx]) {
                task.plan[idx].status = StepStatus::Blocked;
                let message = format!("Step blocked by safety: {}", task.plan[idx].description);
                warn!(task_id = %task.id, "{message}");
                task.append_log(message);
                break;
            }

            let Some(agent) = self.roster.resolve(&task.plan[idx].agent_name) else {
                task.plan[idx].status = StepStatus::Error;
                let message = format!("No agent found: {}", task.plan[idx].agent_name);
                warn!(task_id = %task.id, "{message}");
                task.append_log(message);
                continue;
            };
            let agent = Arc::clone(agent);

            task.append_log(format!(
                "Running step via agent '{}': {}",
                task.plan[idx].agent_name, task.plan[idx].description
            ));
            task.plan[idx].mark_started();
            let started = Instant::now();

            // Snapshot so the agent can borrow the whole task read-only.
            let snapshot = task.plan[idx].clone();
            match agent.run(&snapshot, &task).await {
                Err(err) => {
                    let elapsed = started.elapsed().as_secs_f64();
                    let message = format!("Agent '{}' failed: {err:#}", agent.name());
                    let step = &mut task.plan[idx];
                    step.result = Some(Value::String(message.clone()));
                    step.status = StepStatus::Error;
                    step.mark_finished(elapsed);
                    task.status = TaskStatus::Error;
                    warn!(task_id = %task.id, "{message}");
                    task.append_log(message);
                    break;
                }
                Ok(result) => {
                    let elapsed = started.elapsed().as_secs_f64();
                    let step = &mut task.plan[idx];
                    step.result = Some(self.safety.post_process(result));
                    step.status = StepStatus::Done;
                    step.mark_finished(elapsed);
                    let description = step.description.clone();
                    task.append_log(format!(
                        "Step completed in {elapsed:.2}s: {description}"
                    ));
                    self.memory
                        .store_intermediate(&task.user_id, &task.objective, &task.plan[idx]);
                }
            }
        }

        let final_answer = self.summarize_results(&mut task).await;
        task.context
            .insert("final_answer".to_string(), Value::String(final_answer));
        if task.status != TaskStatus::Error {
            task.status = TaskStatus::Completed;
        }
        info!(task_id = %task.id, status = ?task.status, "task finished");
        task
    }

    /// Ask the model for a plan; fall back to one research step covering
    /// the whole objective when planning yields nothing usable.
    async fn create_plan(&self, task: &mut Task) -> Vec<Step> {
        let outcome = match self.llm.chat(PLANNER_SYSTEM, &task.objective).await {
            Ok(response) => decode_plan(&response),
            Err(err) => Err(PlanError::Chat(format!("{err:#}"))),
        };

        let mut steps = match outcome {
            Ok(steps) => steps,
            Err(err) => {
                task.append_log(format!(
                    "Plan parsing failed, falling back to single research step: {err}"
                ));
                Vec::new()
            }
        };

        if steps.is_empty() {
            steps.push(Step::new(
                task.objective.clone(),
                AgentKind::Research.as_str(),
            ));
        }
        steps
    }

    /// Synthesize the final answer from the full plan, including steps that
    /// never ran or errored. Best-effort: a chat failure is logged and
    /// reported inline rather than propagated.
    async fn summarize_results(&self, task: &mut Task) -> String {
        let steps_summary: Vec<Value> = task
            .plan
            .iter()
            .map(|s| json!({"description": s.description, "result": s.result}))
            .collect();

        let user = json_dump(&json!({
            "objective": task.objective,
            "steps": steps_summary,
        }));

        match self.llm.chat(ANALYST_SYSTEM, &user).await {
            Ok(answer) => answer,
            Err(err) => {
                let message = format!("Summary generation failed: {err:#}");
                task.append_log(&message);
                message
            }
        }
    }
}
