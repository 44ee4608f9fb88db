use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::commands;

/// Entry point for the `hackbuddy` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "hackbuddy",
    about = "Your hackathon AI mentor: validate ideas and get structured roadmaps",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging of AI requests and responses
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a hackathon project idea.
    Analyze(AnalyzeArgs),
    /// Sign in so analyses can be requested.
    Login(LoginArgs),
    /// Sign out of the current session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// View or change hackbuddy settings.
    Config(ConfigArgs),
    /// Interactive first-time configuration.
    Setup,
    /// What hackbuddy is and how it works.
    About,
}

#[derive(Debug, Default, Args)]
pub struct AnalyzeArgs {
    /// What is your hackathon idea?
    #[arg(long)]
    pub idea: Option<String>,

    /// Time available, e.g. "48 hours" or "3 days"
    #[arg(long = "time-frame")]
    pub time_frame: Option<String>,

    /// Number of people on the team
    #[arg(long = "team-size")]
    pub team_size: Option<String>,

    /// The team's skills, e.g. "React, Python, design"
    #[arg(long = "skills", alias = "skill-set")]
    pub skill_set: Option<String>,

    /// Read the project from a JSON file (`-` for stdin); flags override its fields
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Save the analysis as a Markdown report
    #[arg(long)]
    pub export: bool,

    /// Directory for the Markdown report (defaults to the configured export directory)
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Copy a short summary to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print the analysis as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address to sign in with
    #[arg(long)]
    pub email: String,

    /// Optional full name shown instead of the email
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Set the Gemini API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the model used for analysis
    #[arg(long)]
    pub model: Option<String>,

    /// Set the maximum number of output tokens
    #[arg(long)]
    pub max_output_tokens: Option<u32>,

    /// Set the default directory for exported reports
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn has_updates(&self) -> bool {
        self.api_key.is_some()
            || self.timeout.is_some()
            || self.model.is_some()
            || self.max_output_tokens.is_some()
            || self.export_dir.is_some()
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
