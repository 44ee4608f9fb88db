use anyhow::Result;

use crate::config::Config;
use crate::session::SessionStore;

use super::account;
use super::analyze;
use super::args::{Cli, Command};
use super::config_cmd;
use super::setup;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => show_welcome_message(),
        Some(Command::Setup) => setup::run_setup(),
        Some(Command::About) => {
            show_about();
            Ok(())
        }
        Some(Command::Login(args)) => account::handle_login(args),
        Some(Command::Logout) => account::handle_logout(),
        Some(Command::Whoami) => account::handle_whoami(),
        Some(Command::Config(args)) => config_cmd::handle_config(args),
        Some(Command::Analyze(args)) => {
            let config = Config::load_unvalidated()?;
            analyze::handle_analyze(args, &config).await
        }
    }
}

fn show_welcome_message() -> Result<()> {
    let config_path = Config::config_path()?;
    let config_exists = config_path.exists();

    println!("🚀 Welcome to HackBuddy - Your Hackathon AI Mentor!");
    println!();
    println!("📖 What hackbuddy does:");
    println!("   • Validates the feasibility of your hackathon idea with a 1-10 score");
    println!("   • Drafts a phased roadmap with tasks, tools and time estimates");
    println!("   • Suggests expansion ideas and monetization opportunities");
    println!("   • Exports the analysis as Markdown or copies a summary to your clipboard");
    println!();

    if !config_exists {
        println!("⚠️  Configuration not found. Let's get you set up!");
        println!("   Run: hackbuddy setup");
        println!();
    }

    println!("💡 How to use hackbuddy:");
    println!("   hackbuddy setup                                   # Interactive first-time setup");
    println!("   hackbuddy login --email you@example.com           # Sign in");
    println!("   hackbuddy analyze                                 # Answer the questions interactively");
    println!(
        "   hackbuddy analyze --idea '...' --time-frame '48 hours' --team-size 3 --skills 'React, Python'"
    );
    println!("   hackbuddy analyze --input project.json --export   # Save a Markdown report");
    println!("   hackbuddy analyze ... --copy                      # Copy a summary to the clipboard");
    println!("   hackbuddy config --model gemini-1.5-flash         # Change settings");
    println!();

    match SessionStore::open_default().and_then(|store| store.load()) {
        Ok(session) => match session.user {
            Some(user) => println!("👤 Signed in as {}", user.display_name()),
            None => println!("👤 Not signed in. Run: hackbuddy login --email you@example.com"),
        },
        Err(_) => println!("⚠️  Session file exists but couldn't be read. Run: hackbuddy logout"),
    }

    if config_exists {
        match Config::load_unvalidated() {
            Ok(loaded_config) => {
                println!("📋 Model: {}", loaded_config.models.analysis);
                println!("   Timeout: {}s", loaded_config.llm.timeout_secs);
            }
            Err(_) => {
                println!("⚠️  Configuration exists but couldn't be loaded.");
                println!("   Run: hackbuddy setup");
            }
        }
    }

    println!();
    println!("❓ For more help: hackbuddy --help");
    Ok(())
}

fn show_about() {
    println!("✨ About HackBuddy");
    println!();
    println!("Your AI-powered mentor designed to help hackathon participants validate ideas,");
    println!("create structured roadmaps, and build winning MVPs within tight time constraints.");
    println!();
    println!("🎯 Our Mission");
    println!("   Empower hackathon participants with AI-driven insights that help them validate");
    println!("   their ideas, plan efficiently, and maximize their chances of success.");
    println!();
    println!("⚙️  How It Works");
    println!("   Describe your project, team size, skills, and time constraints. The AI analyzes");
    println!("   feasibility and generates a roadmap with tasks, tools, and timeline recommendations.");
    println!();
    println!("👥 For Teams");
    println!("   Solo developer or full team, recommendations adapt to your collective skills.");
    println!();
    println!("⏱️  Time-Aware");
    println!("   Roadmaps account for your available time and skill level so you can ship a working MVP.");
}
