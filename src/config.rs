//! Configuration for the orchestrator.
//!
//! Configuration can be set via environment variables:
//! - `TASKFORGE_MEMORY_TOP_K` - Optional. Episodes retrieved per task. Defaults to `10`.
//! - `TASKFORGE_SEARCH_MAX_RESULTS` - Optional. Results requested from `web_search`. Defaults to `3`.
//! - `TASKFORGE_QUERY_MAX_CHARS` - Optional. Max characters of the objective used as a search query. Defaults to `200`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Tunables for plan execution and retrieval.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// How many memory episodes to retrieve at the start of a task.
    pub memory_top_k: usize,

    /// How many results the research agent requests from `web_search`.
    pub search_max_results: usize,

    /// Objective truncation length when used as a search query.
    pub query_max_chars: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            memory_top_k: 10,
            search_max_results: 3,
            query_max_chars: 200,
        }
    }
}

impl OrchestratorConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(k) = parse_env("TASKFORGE_MEMORY_TOP_K")? {
            config.memory_top_k = k;
        }
        if let Some(n) = parse_env("TASKFORGE_SEARCH_MAX_RESULTS")? {
            config.search_max_results = n;
        }
        if let Some(n) = parse_env("TASKFORGE_QUERY_MAX_CHARS")? {
            config.query_max_chars = n;
        }
        Ok(config)
    }
}

fn parse_env(name: &str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name.to_string(), raw)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.memory_top_k, 10);
        assert_eq!(config.search_max_results, 3);
        assert_eq!(config.query_max_chars, 200);
    }

    #[test]
    fn from_env_rejects_non_numeric_values() {
        std::env::set_var("TASKFORGE_QUERY_MAX_CHARS", "not-a-number");
        let result = OrchestratorConfig::from_env();
        std::env::remove_var("TASKFORGE_QUERY_MAX_CHARS");
        assert!(matches!(result, Err(ConfigError::InvalidValue(_, _))));
    }
}
