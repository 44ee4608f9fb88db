use colored::*;
use std::fmt::Write;

use crate::analysis::{AnalysisResult, format_score};

fn bullets(doc: &mut String, marker: &str, items: &[String]) {
    for item in items {
        let _ = writeln!(doc, "   {marker} {item}");
    }
}

/// Terminal rendering of an analysis: verdict, roadmap, future scope.
pub(crate) fn render_analysis(result: &AnalysisResult) -> String {
    let mut doc = String::new();
    let validation = &result.validation;

    let mark = if validation.is_feasible { "✅" } else { "❌" };
    let _ = writeln!(
        doc,
        "{} {}  {}",
        mark,
        "Validation Results".bold(),
        format!("{}/10", format_score(validation.score)).magenta().bold()
    );
    let verdict = if validation.is_feasible {
        validation.verdict().green()
    } else {
        validation.verdict().red()
    };
    let _ = writeln!(doc, "   {verdict}");
    let _ = writeln!(doc, "   {}\n", validation.reasoning);

    let _ = writeln!(doc, "{}", "🗺️  Development Roadmap".bold());
    if result.roadmap.is_empty() {
        let _ = writeln!(doc, "   {}", "No phases suggested.".dimmed());
    }
    for (idx, phase) in result.roadmap.iter().enumerate() {
        let _ = writeln!(
            doc,
            "\n  {} {} {}",
            format!("{}.", idx + 1).cyan(),
            phase.phase.bold(),
            format!("({})", phase.estimated_time).dimmed()
        );
        let _ = writeln!(doc, "   Tasks:");
        bullets(&mut doc, "•", &phase.tasks);
        if !phase.tools.is_empty() {
            let _ = writeln!(
                doc,
                "   Recommended Tools: {}",
                phase.tools.join(", ").blue()
            );
        }
    }

    let _ = writeln!(doc, "\n{}", "🚀 Future Scope".bold());
    let _ = writeln!(doc, "  {}", "Expansion Ideas".underline());
    bullets(&mut doc, "•", &result.future_scope.expansion);
    let _ = writeln!(doc, "  {}", "Monetization Opportunities".underline());
    bullets(&mut doc, "•", &result.future_scope.monetization);

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Feasibility, FutureScope, RoadmapPhase};

    #[test]
    fn render_lists_phases_and_scope() {
        colored::control::set_override(false);

        let result = AnalysisResult {
            validation: Feasibility {
                is_feasible: false,
                reasoning: "Needs hardware you do not have.".to_string(),
                score: 4.0,
            },
            roadmap: vec![RoadmapPhase {
                phase: "Prototype".to_string(),
                tasks: vec!["Wire sensors".to_string()],
                estimated_time: "10 hours".to_string(),
                tools: vec!["Arduino".to_string(), "C++".to_string()],
            }],
            future_scope: FutureScope {
                expansion: vec!["Cloud dashboard".to_string()],
                monetization: vec!["Hardware kits".to_string()],
            },
        };

        let text = render_analysis(&result);
        assert!(text.contains("❌ Validation Results  4/10"));
        assert!(text.contains("Not Feasible"));
        assert!(text.contains("1. Prototype (10 hours)"));
        assert!(text.contains("   • Wire sensors"));
        assert!(text.contains("Recommended Tools: Arduino, C++"));
        assert!(text.contains("   • Hardware kits"));
    }
}
