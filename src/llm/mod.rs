//! Chat client abstraction over language models.
//!
//! The orchestrator and the agents only ever see [`ChatClient`]: one
//! blocking-style call taking a system prompt and user content and returning
//! the model's text. The shipped implementation is [`StubChatClient`], a
//! fixed-response stand-in; swap in a real client by implementing the trait.

mod stub;

pub use stub::{StubChatClient, FINAL_ANSWER_PREFIX, SYNTHESIS_PREFIX};

use async_trait::async_trait;

/// Minimal interface for pluggable chat-style LLM clients.
///
/// No streaming and no token accounting; the caller gets the full response
/// text or an error.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one system + user message pair and return the response text.
    async fn chat(&self, system: &str, user: &str) -> anyhow::Result<String>;
}
