use anyhow::Result;

use crate::config::Config;

use super::args::ConfigArgs;
use super::util::mask_api_key;

pub(crate) fn handle_config(args: ConfigArgs) -> Result<()> {
    let mut config = Config::load_unvalidated()?;

    if args.has_updates() {
        apply_updates(&mut config, args);
        config.save()?;
        println!(
            "✅ Configuration saved to {}",
            Config::config_path()?.display()
        );
    }

    print_config(&config);
    Ok(())
}

fn apply_updates(config: &mut Config, args: ConfigArgs) {
    if let Some(api_key) = args.api_key {
        config.llm.api_key = api_key;
    }

    if let Some(timeout) = args.timeout {
        config.llm.timeout_secs = timeout;
    }

    if let Some(model) = args.model {
        config.models.analysis = model;
    }

    if let Some(max_output_tokens) = args.max_output_tokens {
        config.models.max_output_tokens = Some(max_output_tokens);
    }

    if let Some(export_dir) = args.export_dir {
        config.export.directory = export_dir;
    }
}

fn print_config(config: &Config) {
    println!("📋 Current configuration:");
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Model: {}", config.models.analysis);
    match config.models.max_output_tokens {
        Some(limit) => println!("   Max Output Tokens: {limit}"),
        None => println!("   Max Output Tokens: (model default)"),
    }
    println!("   Report: {}", config.export.report_path().display());
}
