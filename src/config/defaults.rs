use std::path::PathBuf;

use super::constants::*;
use super::types::{ExportSettings, LlmSettings, ModelSettings};

pub fn default_user_agent() -> String {
    format!("hackbuddy/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            analysis: DEFAULT_ANALYSIS_MODEL.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
        }
    }
}
