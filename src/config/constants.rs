pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ANALYSIS_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REPORT_FILE_NAME: &str = "hackbuddy-analysis.md";
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
