use super::types::{Config, ExportSettings, LlmSettings, ModelSettings};

/// Layers overrides onto the built-in defaults, one section at a time.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_llm(mut self, update: impl FnOnce(&mut LlmSettings)) -> Self {
        update(&mut self.config.llm);
        self
    }

    pub fn with_models(mut self, update: impl FnOnce(&mut ModelSettings)) -> Self {
        update(&mut self.config.models);
        self
    }

    pub fn with_export(mut self, update: impl FnOnce(&mut ExportSettings)) -> Self {
        update(&mut self.config.export);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
