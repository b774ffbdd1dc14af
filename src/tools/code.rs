//! Code execution tool (simulated).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::Tool;

#[derive(Debug, Deserialize)]
struct RunCodeArgs {
    language: String,
    code: String,
}

/// Pretends to run code and reports that execution is not implemented.
///
/// This environment only simulates execution; the fixed response shape
/// (`{status, output, error}`) is the contract a real sandbox would fill in.
pub struct RunCode;

#[async_trait]
impl Tool for RunCode {
    fn name(&self) -> &str {
        "run_code"
    }

    fn description(&self) -> &str {
        "Run code in a sandbox (simulated, never executes anything)"
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let args: RunCodeArgs = serde_json::from_value(args)?;
        tracing::info!(
            language = %args.language,
            code_len = args.code.len(),
            "run_code invoked"
        );
        Ok(json!({
            "status": "not_implemented",
            "output": "",
            "error": null
        }))
    }
}
