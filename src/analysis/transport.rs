use tracing::{debug, warn};

use crate::client::{DynLlmClient, GenerateContentRequest, GenerationConfig};
use crate::config::ModelSettings;
use crate::error::AnalysisError;

/// Sends one prompt and returns the first candidate's text.
pub(crate) async fn call_analysis_model(
    client: &DynLlmClient,
    prompt: &str,
    models: &ModelSettings,
) -> Result<String, AnalysisError> {
    let generation_config = GenerationConfig {
        temperature: models.temperature,
        max_output_tokens: models.max_output_tokens,
    };

    let mut request = GenerateContentRequest::from_prompt(prompt);
    if !generation_config.is_empty() {
        request.generation_config = Some(generation_config);
    }

    let response = client.generate_content(&models.analysis, request).await?;

    if let Some(reason) = response
        .candidates
        .first()
        .and_then(|candidate| candidate.finish_reason.as_deref())
    {
        debug!(finish_reason = reason, "analysis candidate finished");
        if reason == "MAX_TOKENS" {
            warn!("analysis response was truncated by the output token limit");
        }
    }

    response
        .first_text()
        .ok_or(AnalysisError::MissingCandidateText)
}
