//! Backing stores for the memory layer.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored step outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub user_id: String,
    pub objective: String,
    pub step_description: String,
    pub result: Option<Value>,
    /// ISO-8601 timestamp of when the episode was stored
    pub timestamp: String,
}

/// Append-only episode store, namespaced by user.
///
/// A deliberately naive "vector store": no embeddings, no ranking, just the
/// last `k` entries per namespace. Keeps the retrieval surface identical to
/// a real similarity search so one can be swapped in later.
#[derive(Debug, Default)]
pub struct EpisodeStore {
    data: RwLock<HashMap<String, Vec<Episode>>>,
}

impl EpisodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an episode to the namespace.
    pub fn add(&self, namespace: &str, episode: Episode) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.entry(namespace.to_string()).or_default().push(episode);
    }

    /// Up to `top_k` most recent episodes, insertion order preserved
    /// (most recent last). `_query` is unused; see module docs.
    pub fn recent(&self, namespace: &str, _query: &str, top_k: usize) -> Vec<Episode> {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        match data.get(namespace) {
            Some(items) => items[items.len().saturating_sub(top_k)..].to_vec(),
            None => Vec::new(),
        }
    }
}

/// Flat key/value store with last-write-wins semantics.
#[derive(Debug, Default)]
pub struct FactStore {
    data: RwLock<HashMap<String, Value>>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, overwriting any existing value.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.insert(key.into(), value);
    }

    /// Get a key, returning `default` when absent.
    pub fn get(&self, key: &str, default: Value) -> Value {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        data.get(key).cloned().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn episode(text: &str) -> Episode {
        Episode {
            user_id: "u".into(),
            objective: "o".into(),
            step_description: text.into(),
            result: None,
            timestamp: crate::util::now_iso(),
        }
    }

    #[test]
    fn recent_takes_the_tail() {
        let store = EpisodeStore::new();
        for i in 0..4 {
            store.add("ns", episode(&format!("e{i}")));
        }
        let tail = store.recent("ns", "", 2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].step_description, "e2");
        assert_eq!(tail[1].step_description, "e3");
    }

    #[test]
    fn recent_on_empty_namespace_is_empty() {
        let store = EpisodeStore::new();
        assert!(store.recent("missing", "", 5).is_empty());
    }

    #[test]
    fn fact_store_overwrites() {
        let store = FactStore::new();
        store.set("k", json!(1));
        store.set("k", json!(2));
        assert_eq!(store.get("k", Value::Null), json!(2));
        assert_eq!(store.get("absent", json!("fallback")), json!("fallback"));
    }
}
