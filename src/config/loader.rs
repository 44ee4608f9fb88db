use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};
use tracing::debug;

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, PersistedConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".hackbuddy/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads file and environment layers. Call `validate` before talking to
    /// the AI service.
    pub fn load_unvalidated() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        Ok(builder.build())
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(file.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        let FileConfig {
            llm,
            models,
            export,
        } = self;

        let builder = match llm {
            Some(file) => builder.with_llm(|llm| {
                if let Some(api_key) = file.api_key {
                    llm.api_key = api_key;
                }
                if let Some(timeout) = file.timeout_secs {
                    llm.timeout_secs = timeout;
                }
                if let Some(base_url) = file.base_url {
                    llm.base_url = base_url;
                }
                if let Some(user_agent) = file.user_agent {
                    llm.user_agent = user_agent;
                }
            }),
            None => builder,
        };

        let builder = match models {
            Some(file) => builder.with_models(|models| {
                if let Some(analysis) = file.analysis {
                    models.analysis = analysis;
                }
                if file.temperature.is_some() {
                    models.temperature = file.temperature;
                }
                if file.max_output_tokens.is_some() {
                    models.max_output_tokens = file.max_output_tokens;
                }
            }),
            None => builder,
        };

        match export {
            Some(file) => builder.with_export(|export| {
                if let Some(directory) = file.directory {
                    export.directory = directory;
                }
                if let Some(file_name) = file.file_name {
                    export.file_name = file_name;
                }
            }),
            None => builder,
        }
    }
}
