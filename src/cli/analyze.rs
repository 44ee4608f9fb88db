use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::analysis::{Analysis, Analyzer, InputField, ProjectInput, check_submission};
use crate::client::GeminiClient;
use crate::config::Config;
use crate::error::{AnalysisError, ErrorKind};
use crate::export::{copy_to_clipboard, render_markdown, render_summary, write_report};
use crate::session::{SessionContext, SessionStore};

use super::args::AnalyzeArgs;
use super::render::render_analysis;
use super::util::{prompt_required, read_piped_stdin, stdin_is_terminal};

pub(crate) async fn handle_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let input = collect_input(&args)?;
    let session = SessionStore::open_default()?.load()?;
    preflight(&input, &session, config)?;

    let client = GeminiClient::new(&config.llm)?;
    let mut analyzer = Analyzer::new(Arc::new(client), config.models.clone());

    if !args.json {
        println!("✨ Analyzing your project with {}...", config.models.analysis);
    }

    let analysis = match analyzer.analyze(input, &session).await {
        Ok(analysis) => analysis,
        Err(err) => return Err(surface_failure(err)),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&analysis.result)
            .context("Failed to serialize analysis to JSON")?;
        println!("{json}");
    } else {
        println!("✅ Analysis complete!\n");
        print!("{}", render_analysis(&analysis.result));
    }

    if args.export {
        export_report(analysis, &args, config).await?;
    }

    if args.copy {
        copy_summary(analysis).await;
    }

    Ok(())
}

/// Input and sign-in problems are reported before a missing API key.
fn preflight(input: &ProjectInput, session: &SessionContext, config: &Config) -> Result<()> {
    check_submission(input, session).map_err(surface_failure)?;
    config.validate()
}

fn surface_failure(err: AnalysisError) -> anyhow::Error {
    debug!(kind = %err.kind(), error = %err, "analysis failed");
    if err.kind() == ErrorKind::AuthRequired {
        println!("🔐 Please sign in to analyze your project:");
        println!("   hackbuddy login --email you@example.com");
    }
    anyhow!(err.user_message())
}

fn collect_input(args: &AnalyzeArgs) -> Result<ProjectInput> {
    let base = match &args.input {
        Some(path) => read_input_file(path)?,
        None => ProjectInput::default(),
    };
    let mut input = merge_input(base, args);

    let missing = input.missing_fields();
    if !missing.is_empty() && stdin_is_terminal() {
        println!("🧭 Tell us about your hackathon project");
        for field in missing {
            *input.field_mut(field) = prompt_required(field_prompt(field))?;
        }
    }

    Ok(input)
}

fn read_input_file(path: &Path) -> Result<ProjectInput> {
    let contents = if path == Path::new("-") {
        read_piped_stdin()?.ok_or_else(|| anyhow!("No project JSON was piped on stdin"))?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed reading project file {}", path.display()))?
    };

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed parsing project JSON from {}", path.display()))
}

/// Command-line flags win over fields read from a project file.
fn merge_input(mut base: ProjectInput, args: &AnalyzeArgs) -> ProjectInput {
    let overrides = [
        (InputField::Idea, &args.idea),
        (InputField::TimeFrame, &args.time_frame),
        (InputField::TeamSize, &args.team_size),
        (InputField::SkillSet, &args.skill_set),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *base.field_mut(field) = value.clone();
        }
    }
    base
}

fn field_prompt(field: InputField) -> &'static str {
    match field {
        InputField::Idea => "💡 What is your hackathon idea?",
        InputField::TimeFrame => "⏰ Time available (e.g., 48 hours, 3 days)",
        InputField::TeamSize => "👥 Team size (number of people)",
        InputField::SkillSet => "🛠️  Your team's skills",
    }
}

async fn export_report(analysis: &Analysis, args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let directory = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.directory.clone());
    let markdown = render_markdown(&analysis.result, &analysis.input);
    let path = write_report(&directory, &config.export.file_name, &markdown).await?;
    println!("📄 Exported! Your analysis was saved to {}", path.display());
    Ok(())
}

async fn copy_summary(analysis: &Analysis) {
    let summary = render_summary(&analysis.result);
    match copy_to_clipboard(&summary).await {
        Ok(tool) => println!("📋 Copied! Analysis summary copied to clipboard ({tool})."),
        Err(err) => {
            warn!(error = %err, "clipboard copy failed");
            println!("⚠️  Could not reach the clipboard. Summary:\n\n{summary}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;

    #[test]
    fn flags_override_file_fields() {
        let base = ProjectInput::new("from file", "24 hours", "2", "Rust");
        let args = AnalyzeArgs {
            team_size: Some("4".to_string()),
            skill_set: Some("Rust, Svelte".to_string()),
            ..AnalyzeArgs::default()
        };

        let merged = merge_input(base, &args);
        assert_eq!(merged, ProjectInput::new("from file", "24 hours", "4", "Rust, Svelte"));
    }

    #[test]
    fn sign_in_is_reported_before_missing_api_key() {
        let config = Config::builder().build();
        assert!(config.llm.api_key.is_empty());

        let full = ProjectInput::new("Trail map", "3 days", "1", "Go");
        let err = preflight(&full, &SessionContext::anonymous(), &config).unwrap_err();
        assert!(err.to_string().contains("Authentication required"));

        let signed_in = SessionContext::signed_in(User::new("dev@example.com"));
        let blank = ProjectInput::new("Trail map", "  ", "1", "Go");
        let err = preflight(&blank, &signed_in, &config).unwrap_err();
        assert!(err.to_string().contains("time frame is required"));

        let err = preflight(&full, &signed_in, &config).unwrap_err();
        assert!(err.to_string().contains("Gemini API key not found"));

        let mut ready = config.clone();
        ready.llm.api_key = "test-key".to_string();
        assert!(preflight(&full, &signed_in, &ready).is_ok());
    }

    #[test]
    fn project_file_uses_camel_case_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        std::fs::write(
            &path,
            r#"{"idea":"Trail map","timeFrame":"3 days","teamSize":"1","skillSet":"Go"}"#,
        )
        .unwrap();

        let input = read_input_file(&path).unwrap();
        assert_eq!(input, ProjectInput::new("Trail map", "3 days", "1", "Go"));
    }

    #[test]
    fn project_file_errors_mention_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_input_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
