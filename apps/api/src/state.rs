use std::sync::Arc;

use crate::analysis::explanation::{ExplanationGenerator, LlmExplanationGenerator};
use crate::config::Config;
use crate::llm_client::{LlmClient, LlmSettings};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-analysis data; every request runs the pipeline on its own inputs.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable explanation collaborator. `None` when no API key is configured.
    pub explainer: Option<Arc<dyn ExplanationGenerator>>,
}

impl AppState {
    /// Builds the state, wiring the LLM-backed explainer when a key is present.
    pub fn from_config(config: Config) -> Self {
        let explainer = config.anthropic_api_key.clone().map(|key| {
            let client = LlmClient::new(key, LlmSettings::from_config(&config));
            Arc::new(LlmExplanationGenerator(client)) as Arc<dyn ExplanationGenerator>
        });
        Self { config, explainer }
    }

    pub fn with_explainer(config: Config, explainer: Arc<dyn ExplanationGenerator>) -> Self {
        Self {
            config,
            explainer: Some(explainer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_means_no_explainer() {
        let state = AppState::from_config(Config::default());
        assert!(state.explainer.is_none());
    }

    #[test]
    fn test_key_wires_llm_explainer() {
        let config = Config {
            anthropic_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        let state = AppState::from_config(config);
        assert!(state.explainer.is_some());
    }
}
