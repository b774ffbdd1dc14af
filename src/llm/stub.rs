//! Fixed-response chat client for demos and tests.

use async_trait::async_trait;
use serde_json::json;

use super::ChatClient;
use crate::util::{json_dump, truncate_chars};

/// Prefix of the stub's final-answer response.
pub const FINAL_ANSWER_PREFIX: &str = "FINAL ANSWER:";

/// Prefix of the stub's synthesis response.
pub const SYNTHESIS_PREFIX: &str = "SYNTHESIZED REPORT:";

/// How much of the user content the stub echoes back.
const ECHO_CHARS: usize = 400;

/// Minimal stand-in for a real model.
///
/// Keys its canned responses off the system prompt: the planner prompt gets
/// a fixed two-step JSON plan (research then comms), the synthesis and
/// analyst prompts get labeled echoes of the user content, and everything
/// else gets a generic echo.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubChatClient;

#[async_trait]
impl ChatClient for StubChatClient {
    async fn chat(&self, system: &str, user: &str) -> anyhow::Result<String> {
        if system.contains("You are a planner") {
            return Ok(json_dump(&json!({
                "steps": [
                    {
                        "description": "Do initial research on the objective",
                        "agent_name": "research"
                    },
                    {
                        "description": "Produce a final written summary",
                        "agent_name": "comms"
                    }
                ]
            })));
        }
        if system.contains("You are a synthesis engine") {
            return Ok(format!(
                "{}\n{}",
                SYNTHESIS_PREFIX,
                truncate_chars(user, ECHO_CHARS)
            ));
        }
        if system.contains("senior analyst") {
            return Ok(format!(
                "{}\n{}",
                FINAL_ANSWER_PREFIX,
                truncate_chars(user, ECHO_CHARS)
            ));
        }
        Ok(format!(
            "[STUB RESPONSE]\n{}",
            truncate_chars(user, ECHO_CHARS)
        ))
    }
}
