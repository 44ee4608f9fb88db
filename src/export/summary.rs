use crate::analysis::{AnalysisResult, format_score};

use super::markdown::REPORT_TITLE;

/// Short plain-text digest meant for the clipboard.
pub fn render_summary(result: &AnalysisResult) -> String {
    let validation = &result.validation;
    let roadmap = result
        .roadmap
        .iter()
        .map(|phase| format!("{}: {}", phase.phase, phase.tasks.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{REPORT_TITLE}\n\nValidation: {} ({}/10)\nReasoning: {}\n\nRoadmap:\n{}",
        validation.verdict(),
        format_score(validation.score),
        validation.reasoning,
        roadmap
    )
}
