//! Web search tool (simulated).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

fn default_max_results() -> usize {
    3
}

#[derive(Debug, Deserialize)]
struct WebSearchArgs {
    query: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

/// Returns canned search results for a query.
///
/// Stands in for a real search backend; the result shape
/// (`[{title, url}, ...]`) is what the research agent consumes.
pub struct WebSearch;

#[async_trait]
impl Tool for WebSearch {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for a query (simulated results)"
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let args: WebSearchArgs = serde_json::from_value(args)?;
        tracing::info!(query = %args.query, "web_search invoked");

        let results: Vec<Value> = (0..args.max_results)
            .map(|_| {
                json!({
                    "title": format!("Fake result for {}", args.query),
                    "url": "https://example.com"
                })
            })
            .collect();
        Ok(Value::Array(results))
    }
}
