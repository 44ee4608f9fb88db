use anyhow::{Result, anyhow, bail};

use super::constants::API_KEY_ENV_VAR;
use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(anyhow!(
            "Gemini API key not found. Set {} or add it to {}",
            API_KEY_ENV_VAR,
            Config::config_path()?.display()
        ));
    }

    if config.llm.timeout_secs == 0 {
        bail!("timeout_secs must be greater than zero");
    }

    let base_url = config.llm.base_url.trim();
    if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        bail!("base_url '{base_url}' must start with http:// or https://");
    }

    if config.export.file_name.trim().is_empty() {
        bail!("export file_name cannot be empty");
    }

    Ok(())
}
