use std::fmt::Write;

use crate::analysis::{AnalysisResult, ProjectInput, format_score};

pub const REPORT_TITLE: &str = "HackBuddy Analysis Report";
pub const REPORT_FOOTER: &str = "*Generated by HackBuddy - Your Hackathon AI Mentor*";

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full Markdown report for saving to disk.
pub fn render_markdown(result: &AnalysisResult, input: &ProjectInput) -> String {
    let validation = &result.validation;
    let feasibility = if validation.is_feasible {
        "✅ Feasible"
    } else {
        "❌ Not Feasible"
    };

    let mut doc = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(doc, "# {REPORT_TITLE}\n");
    let _ = writeln!(doc, "## Project Idea\n{}\n", input.idea);
    let _ = writeln!(doc, "## Project Details");
    let _ = writeln!(doc, "- **Time Frame:** {}", input.time_frame);
    let _ = writeln!(doc, "- **Team Size:** {} people", input.team_size);
    let _ = writeln!(doc, "- **Skill Set:** {}\n", input.skill_set);

    let _ = writeln!(doc, "## Validation Results");
    let _ = writeln!(doc, "**Feasibility:** {feasibility}");
    let _ = writeln!(doc, "**Score:** {}/10\n", format_score(validation.score));
    let _ = writeln!(doc, "**Reasoning:** {}\n", validation.reasoning);

    let _ = writeln!(doc, "## Development Roadmap");
    for phase in &result.roadmap {
        let _ = writeln!(doc, "\n### {}", phase.phase);
        let _ = writeln!(doc, "**Estimated Time:** {}\n", phase.estimated_time);
        let _ = writeln!(doc, "**Tasks:**\n{}\n", bullet_list(&phase.tasks));
        let _ = writeln!(doc, "**Recommended Tools:**\n{}", bullet_list(&phase.tools));
    }

    let _ = writeln!(doc, "\n## Future Scope\n");
    let _ = writeln!(
        doc,
        "### Expansion Ideas\n{}\n",
        bullet_list(&result.future_scope.expansion)
    );
    let _ = writeln!(
        doc,
        "### Monetization Opportunities\n{}\n",
        bullet_list(&result.future_scope.monetization)
    );
    let _ = writeln!(doc, "---\n{REPORT_FOOTER}");
    doc
}
