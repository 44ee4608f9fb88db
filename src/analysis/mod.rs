mod parsing;
mod prompt;
mod transport;
mod types;

use std::sync::Arc;

use tracing::{debug, info};

use crate::client::DynLlmClient;
use crate::config::ModelSettings;
use crate::error::AnalysisError;
use crate::session::SessionContext;

pub use parsing::interpret_response;
pub use prompt::build_prompt;
pub use types::{
    Analysis, AnalysisResult, Feasibility, FutureScope, InputField, ProjectInput, RoadmapPhase,
    format_score,
};

/// Checks that a submission may go out: every field filled in, a user signed in.
pub fn check_submission(
    input: &ProjectInput,
    session: &SessionContext,
) -> Result<(), AnalysisError> {
    input.validate()?;
    if !session.is_authenticated() {
        return Err(AnalysisError::AuthRequired);
    }
    Ok(())
}

/// Runs one analysis: input check, sign-in gate, a single model call, then interpretation.
///
/// Nothing touches the network unless the input is complete and the session
/// has a signed-in user.
pub async fn analyze_project(
    client: &DynLlmClient,
    models: &ModelSettings,
    input: &ProjectInput,
    session: &SessionContext,
) -> Result<AnalysisResult, AnalysisError> {
    check_submission(input, session)?;

    let prompt = build_prompt(input);
    debug!(model = %models.analysis, prompt_len = prompt.len(), "requesting project analysis");

    let raw = transport::call_analysis_model(client, &prompt, models).await?;
    let result = interpret_response(&raw)?;

    info!(
        feasible = result.validation.is_feasible,
        score = result.validation.score,
        phases = result.roadmap.len(),
        "analysis complete"
    );
    Ok(result)
}

/// Holds the most recent analysis for one session.
///
/// `analyze` borrows the analyzer mutably, so a second submission cannot start
/// while one is in flight.
pub struct Analyzer {
    client: Arc<DynLlmClient>,
    models: ModelSettings,
    current: Option<Analysis>,
}

impl Analyzer {
    pub fn new(client: Arc<DynLlmClient>, models: ModelSettings) -> Self {
        Self {
            client,
            models,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }

    /// Replaces the held analysis on success and clears it on an upstream failure.
    /// Input and sign-in rejections leave the previous analysis in place.
    pub async fn analyze(
        &mut self,
        input: ProjectInput,
        session: &SessionContext,
    ) -> Result<&Analysis, AnalysisError> {
        let outcome = analyze_project(self.client.as_ref(), &self.models, &input, session).await;
        match outcome {
            Ok(result) => Ok(self.current.insert(Analysis { input, result })),
            Err(err) => {
                if err.kind().is_upstream() {
                    self.current = None;
                }
                Err(err)
            }
        }
    }
}
