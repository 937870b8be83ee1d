//! Fit explanation — hands the rendered prompt to an external text generator.
//!
//! `AppState` holds an `Option<Arc<dyn ExplanationGenerator>>`; `None` when no API key
//! is configured. Generator failures never fail an analysis: they are converted into
//! a user-visible message next to the deterministic results.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::analysis::prompts::EXPLANATION_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

pub const NOT_CONFIGURED_MESSAGE: &str = "Explanation service is not configured.";
pub const GENERATION_FAILED_MESSAGE: &str =
    "The fit explanation could not be generated. The role-fit results above are unaffected.";

/// Produces the 4-part narrative (summary, strengths, gaps, recommendations)
/// for a rendered explanation prompt. The narrative is returned verbatim.
#[async_trait]
pub trait ExplanationGenerator: Send + Sync {
    async fn explain(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Default generator: one chat call through the shared `LlmClient`.
pub struct LlmExplanationGenerator(pub LlmClient);

#[async_trait]
impl ExplanationGenerator for LlmExplanationGenerator {
    async fn explain(&self, prompt: &str) -> Result<String, LlmError> {
        self.0.complete(prompt, EXPLANATION_SYSTEM).await
    }
}

/// Outcome of the explanation step as shown to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplanationOutcome {
    pub explanation: Option<String>,
    pub explanation_error: Option<String>,
}

/// Runs the generator if one is configured, swallowing its failure into a message.
pub async fn explain_fit(
    generator: Option<&dyn ExplanationGenerator>,
    prompt: &str,
) -> ExplanationOutcome {
    let Some(generator) = generator else {
        return ExplanationOutcome {
            explanation: None,
            explanation_error: Some(NOT_CONFIGURED_MESSAGE.to_string()),
        };
    };

    match generator.explain(prompt).await {
        Ok(text) => ExplanationOutcome {
            explanation: Some(text),
            explanation_error: None,
        },
        Err(e) => {
            warn!("Fit explanation failed: {e}");
            ExplanationOutcome {
                explanation: None,
                explanation_error: Some(GENERATION_FAILED_MESSAGE.to_string()),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::{CannedExplanation, FailingExplanation};
    use super::*;

    #[tokio::test]
    async fn test_explanation_returned_verbatim() {
        let generator = CannedExplanation::new("1. Summary\n2. Strengths\n3. Gaps\n4. Recs");
        let outcome = explain_fit(Some(&generator), "prompt body").await;

        assert_eq!(
            outcome.explanation.as_deref(),
            Some("1. Summary\n2. Strengths\n3. Gaps\n4. Recs")
        );
        assert!(outcome.explanation_error.is_none());
        assert_eq!(*generator.prompts.lock().unwrap(), vec!["prompt body"]);
    }

    #[tokio::test]
    async fn test_generator_failure_becomes_message() {
        let outcome = explain_fit(Some(&FailingExplanation), "prompt").await;
        assert!(outcome.explanation.is_none());
        assert_eq!(
            outcome.explanation_error.as_deref(),
            Some(GENERATION_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_missing_generator_reports_not_configured() {
        let outcome = explain_fit(None, "prompt").await;
        assert!(outcome.explanation.is_none());
        assert_eq!(
            outcome.explanation_error.as_deref(),
            Some(NOT_CONFIGURED_MESSAGE)
        );
    }
}
