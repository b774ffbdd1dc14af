//! Tool system for the agents.
//!
//! Tools are named, side-effecting callables the agents invoke by name with
//! JSON keyword arguments. The registry does no validation of arguments
//! beyond what each tool itself enforces, and returns tool output unchanged.
//!
//! The built-in tools are demo collaborators: `web_search` and `run_code`
//! return canned/simulated data, `read_file` reads from disk.

mod code;
mod file_ops;
mod web;

pub use code::RunCode;
pub use file_ops::ReadFile;
pub use web::WebSearch;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from the tool registry.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Unknown tool: {0}")]
    Unknown(String),

    #[error("Tool '{name}' failed: {source}")]
    Execution {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Trait for implementing tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The unique name of this tool.
    fn name(&self) -> &str;

    /// A description of what this tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given keyword-style arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<Value>;
}

/// Registry of available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in demo tools.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for tool in [
            Arc::new(WebSearch) as Arc<dyn Tool>,
            Arc::new(ReadFile),
            Arc::new(RunCode),
        ] {
            let name = tool.name().to_string();
            registry
                .register(name, tool)
                .expect("built-in tool names are distinct");
        }
        registry
    }

    /// Register a tool under a name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        tool: Arc<dyn Tool>,
    ) -> Result<(), ToolError> {
        let name = name.into();
        if self.tools.contains_key(&name) {
            return Err(ToolError::AlreadyRegistered(name));
        }
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Check if a tool exists by name.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All registered tool names, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Invoke a tool by name and return its output unchanged.
    pub async fn call(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::Unknown(name.to_string()))?;

        tool.execute(args)
            .await
            .map_err(|source| ToolError::Execution {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "returns its arguments"
        }

        async fn execute(&self, args: Value) -> anyhow::Result<Value> {
            Ok(args)
        }
    }

    #[tokio::test]
    async fn call_returns_tool_output_unchanged() {
        let mut registry = ToolRegistry::new();
        registry.register("echo", Arc::new(Echo)).unwrap();
        let args = json!({"a": 1, "b": ["x", "y"]});
        let out = registry.call("echo", args.clone()).await.unwrap();
        assert_eq!(out, args);
    }

    #[tokio::test]
    async fn call_on_unregistered_name_fails() {
        let registry = ToolRegistry::new();
        let err = registry.call("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::Unknown(name) if name == "missing"));
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = ToolRegistry::new();
        registry.register("echo", Arc::new(Echo)).unwrap();
        let err = registry.register("echo", Arc::new(Echo)).unwrap_err();
        assert!(matches!(err, ToolError::AlreadyRegistered(_)));
    }

    #[test]
    fn available_is_sorted() {
        let registry = ToolRegistry::with_defaults();
        assert_eq!(registry.available(), vec!["read_file", "run_code", "web_search"]);
    }

    #[test]
    fn has_tool_reflects_registration() {
        let registry = ToolRegistry::with_defaults();
        assert!(registry.has_tool("web_search"));
        assert!(!registry.has_tool("teleport"));
    }
}
