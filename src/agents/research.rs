//! Research agent: search, then synthesize.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::Agent;
use crate::llm::ChatClient;
use crate::task::{Step, Task};
use crate::tools::ToolRegistry;
use crate::util::{json_dump, truncate_chars};

const PLANNING_SYSTEM: &str = "You are a research agent. Decide what to search, \
read results, and synthesize them into a concise, useful report.";

const SYNTHESIS_SYSTEM: &str = "You are a synthesis engine. Combine sources into a report.";

/// Looks things up and fuses what it finds.
///
/// One chat call to plan the lookup, one `web_search` call with the task
/// objective as query, one chat call to fuse sources and planning notes
/// into the final report. Tool or chat failures propagate.
pub struct ResearchAgent {
    llm: Arc<dyn ChatClient>,
    tools: Arc<ToolRegistry>,
    query_max_chars: usize,
    max_results: usize,
}

impl ResearchAgent {
    pub fn new(
        llm: Arc<dyn ChatClient>,
        tools: Arc<ToolRegistry>,
        query_max_chars: usize,
        max_results: usize,
    ) -> Self {
        Self {
            llm,
            tools,
            query_max_chars,
            max_results,
        }
    }
}

#[async_trait]
impl Agent for ResearchAgent {
    fn name(&self) -> &str {
        "research"
    }

    async fn run(&self, step: &Step, task: &Task) -> anyhow::Result<Value> {
        let planning_notes = self
            .llm
            .chat(
                PLANNING_SYSTEM,
                &format!("Objective: {}\nStep: {}", task.objective, step.description),
            )
            .await?;

        let query = truncate_chars(&task.objective, self.query_max_chars);
        let sources = self
            .tools
            .call(
                "web_search",
                json!({"query": query, "max_results": self.max_results}),
            )
            .await?;

        let report = self
            .llm
            .chat(
                SYNTHESIS_SYSTEM,
                &json_dump(&json!({
                    "objective": task.objective,
                    "step": step.description,
                    "sources": sources,
                    "planning_notes": planning_notes,
                })),
            )
            .await?;
        Ok(Value::String(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::StubChatClient;

    #[tokio::test]
    async fn produces_a_synthesized_report() {
        let agent = ResearchAgent::new(
            Arc::new(StubChatClient),
            Arc::new(ToolRegistry::with_defaults()),
            200,
            3,
        );
        let task = Task::new("u", "Investigate rust orchestrators");
        let step = Step::new("initial research", "research");
        let out = agent.run(&step, &task).await.unwrap();
        let text = out.as_str().unwrap();
        assert!(text.starts_with(crate::llm::SYNTHESIS_PREFIX));
        assert!(text.contains("Fake result for Investigate rust orchestrators"));
    }

    #[tokio::test]
    async fn query_is_truncated_to_the_configured_length() {
        let agent = ResearchAgent::new(
            Arc::new(StubChatClient),
            Arc::new(ToolRegistry::with_defaults()),
            5,
            1,
        );
        let task = Task::new("u", "a very long objective indeed");
        let step = Step::new("s", "research");
        let out = agent.run(&step, &task).await.unwrap();
        // The fake search result echoes the (truncated) query.
        assert!(out.as_str().unwrap().contains("Fake result for a ver"));
    }

    #[tokio::test]
    async fn missing_tool_propagates_as_error() {
        let agent = ResearchAgent::new(
            Arc::new(StubChatClient),
            Arc::new(ToolRegistry::new()),
            200,
            3,
        );
        let task = Task::new("u", "objective");
        let step = Step::new("s", "research");
        assert!(agent.run(&step, &task).await.is_err());
    }
}
