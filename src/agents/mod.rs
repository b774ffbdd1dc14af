//! Agents - the workers that execute plan steps.
//!
//! # Agent Types
//! - **ResearchAgent**: plans a lookup, runs `web_search`, fuses the results
//! - **CodeAgent**: proposes a code change/check, runs a simulated test pass
//! - **CommsAgent**: turns prior step results into a stakeholder summary
//!
//! Agents are resolved through [`AgentRoster`], an explicit mapping from the
//! closed [`AgentKind`] set to implementations. A plan step naming an
//! unknown agent is a recoverable error at the orchestrator, never a crash.

mod code;
mod comms;
mod research;

pub use code::CodeAgent;
pub use comms::CommsAgent;
pub use research::ResearchAgent;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::OrchestratorConfig;
use crate::llm::ChatClient;
use crate::task::{Step, Task};
use crate::tools::ToolRegistry;

/// Base trait for all agents.
///
/// An agent consumes one step plus the surrounding task, may call zero or
/// more tools and zero or more chat completions, and returns an opaque
/// result the orchestrator stores verbatim as `step.result`. Any error
/// propagates to the orchestrator's per-step boundary.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Name of this agent, used in logs and failure messages.
    fn name(&self) -> &str;

    /// Execute one step.
    async fn run(&self, step: &Step, task: &Task) -> anyhow::Result<Value>;
}

/// The closed set of worker roles a plan step can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Research,
    Code,
    Comms,
}

impl AgentKind {
    /// Resolve a plan-supplied name. Unknown names return `None`; callers
    /// treat that as a recoverable step error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "research" => Some(Self::Research),
            "code" => Some(Self::Code),
            "comms" => Some(Self::Comms),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Code => "code",
            Self::Comms => "comms",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit mapping from agent kind to implementation.
#[derive(Default)]
pub struct AgentRoster {
    agents: HashMap<AgentKind, Arc<dyn Agent>>,
}

impl AgentRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster with the three shipped agents wired to the given
    /// collaborators.
    pub fn with_defaults(
        llm: Arc<dyn ChatClient>,
        tools: Arc<ToolRegistry>,
        config: &OrchestratorConfig,
    ) -> Self {
        let mut roster = Self::new();
        roster.insert(
            AgentKind::Research,
            Arc::new(ResearchAgent::new(
                Arc::clone(&llm),
                Arc::clone(&tools),
                config.query_max_chars,
                config.search_max_results,
            )),
        );
        roster.insert(
            AgentKind::Code,
            Arc::new(CodeAgent::new(Arc::clone(&llm), tools)),
        );
        roster.insert(AgentKind::Comms, Arc::new(CommsAgent::new(llm)));
        roster
    }

    /// Map a kind to an implementation, replacing any existing mapping.
    pub fn insert(&mut self, kind: AgentKind, agent: Arc<dyn Agent>) {
        self.agents.insert(kind, agent);
    }

    /// Look up the agent for a kind.
    pub fn get(&self, kind: AgentKind) -> Option<&Arc<dyn Agent>> {
        self.agents.get(&kind)
    }

    /// Resolve a plan-supplied agent name to an implementation.
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn Agent>> {
        AgentKind::from_name(name).and_then(|kind| self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_kind_parses_known_names_only() {
        assert_eq!(AgentKind::from_name("research"), Some(AgentKind::Research));
        assert_eq!(AgentKind::from_name("code"), Some(AgentKind::Code));
        assert_eq!(AgentKind::from_name("comms"), Some(AgentKind::Comms));
        assert_eq!(AgentKind::from_name("Research"), None);
        assert_eq!(AgentKind::from_name(""), None);
    }

    #[test]
    fn roster_resolves_by_plan_name() {
        let roster = AgentRoster::with_defaults(
            Arc::new(crate::llm::StubChatClient),
            Arc::new(ToolRegistry::with_defaults()),
            &OrchestratorConfig::default(),
        );
        assert!(roster.resolve("research").is_some());
        assert!(roster.resolve("comms").is_some());
        assert!(roster.resolve("mystery").is_none());
    }
}
