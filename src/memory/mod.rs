//! Memory subsystem: episodic store plus a flat fact store.
//!
//! ```text
//! ┌──────────────┐      ┌───────────────┐
//! │ Orchestrator │─────▶│  MemoryLayer  │
//! └──────────────┘      └───────┬───────┘
//!                       ┌───────┴───────┐
//!                       ▼               ▼
//!                ┌──────────────┐ ┌───────────┐
//!                │ EpisodeStore │ │ FactStore │
//!                │ (append-only)│ │ (KV, LWW) │
//!                └──────────────┘ └───────────┘
//! ```
//!
//! Everything lives in process memory and outlives any single task. The
//! episode store is namespaced by user and queried by recency only; the
//! retrieval signature accepts a query string so a real similarity search
//! can be dropped in without changing callers.

mod store;

pub use store::{Episode, EpisodeStore, FactStore};

use serde_json::Value;

use crate::task::Step;
use crate::util::now_iso;

/// Facade over the episode and fact stores.
///
/// Shared by the orchestrator and (via `Arc`) anything else that needs to
/// read or write memory.
#[derive(Debug, Default)]
pub struct MemoryLayer {
    episodes: EpisodeStore,
    facts: FactStore,
}

impl MemoryLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up to `k` most recent episodes for the user, oldest first.
    ///
    /// `query` is accepted but unused; retrieval is recency-only.
    pub fn retrieve_relevant(&self, user_id: &str, query: &str, k: usize) -> Vec<Episode> {
        self.episodes.recent(user_id, query, k)
    }

    /// Append one episode recording a step outcome.
    ///
    /// Not idempotent: storing the same step twice produces two episodes.
    pub fn store_intermediate(&self, user_id: &str, objective: &str, step: &Step) {
        self.episodes.add(
            user_id,
            Episode {
                user_id: user_id.to_string(),
                objective: objective.to_string(),
                step_description: step.description.clone(),
                result: step.result.clone(),
                timestamp: now_iso(),
            },
        );
    }

    /// Store a fact under `user_id:key`, overwriting any previous value.
    pub fn set_fact(&self, user_id: &str, key: &str, value: Value) {
        self.facts.set(format!("{user_id}:{key}"), value);
    }

    /// Fetch a fact, returning `default` when absent.
    pub fn get_fact(&self, user_id: &str, key: &str, default: Value) -> Value {
        self.facts.get(&format!("{user_id}:{key}"), default)
    }
}
