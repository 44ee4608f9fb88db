use anyhow::Result;

use crate::config::{API_KEY_ENV_VAR, Config, DEFAULT_TIMEOUT_SECS};

use super::util::{mask_api_key, prompt_required, prompt_string_with_default, prompt_timeout};

pub(crate) fn run_setup() -> Result<()> {
    println!("🚀 Welcome to HackBuddy Setup!");
    println!("Let's connect hackbuddy to Google Gemini.");
    println!("   Get a key at https://aistudio.google.com/app/apikey");
    println!("   ({API_KEY_ENV_VAR} in the environment overrides the saved key)\n");

    let mut config = Config::load_unvalidated()?;

    let api_key = prompt_required("🔑 Enter your Gemini API key")?;
    let timeout = prompt_timeout(DEFAULT_TIMEOUT_SECS)?;
    let model = prompt_string_with_default("🤖 Model", &config.models.analysis)?;

    config.llm.api_key = api_key;
    config.llm.timeout_secs = timeout;
    config.models.analysis = model;

    config.validate()?;
    config.save()?;

    println!(
        "\n✅ Configuration saved to {}",
        Config::config_path()?.display()
    );
    println!("📋 Your configuration:");
    println!("   API Key: {}", mask_api_key(&config.llm.api_key));
    println!("   Base URL: {}", config.llm.base_url);
    println!("   Timeout: {}s", config.llm.timeout_secs);
    println!("   Model: {}", config.models.analysis);
    println!("\n🎉 Setup complete! Next steps:");
    println!("   hackbuddy login --email you@example.com");
    println!("   hackbuddy analyze\n");

    Ok(())
}
