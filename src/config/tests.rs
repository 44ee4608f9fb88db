use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use tempfile::TempDir;

use crate::config::Config;
use crate::config::constants::{DEFAULT_ANALYSIS_MODEL, DEFAULT_REPORT_FILE_NAME};
use crate::config::environment::{env_string, env_u32, env_u64};

const MANAGED_VARS: &[&str] = &[
    "GEMINI_API_KEY",
    "HACKBUDDY_BASE_URL",
    "HACKBUDDY_TIMEOUT_SECS",
    "HACKBUDDY_MODEL",
    "HACKBUDDY_MAX_OUTPUT_TOKENS",
    "HACKBUDDY_EXPORT_DIR",
];

fn env_lock<'a>() -> std::sync::MutexGuard<'a, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Sets the given variables and clears every other managed one.
    fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let mut keys: Vec<&str> = MANAGED_VARS.to_vec();
        for (key, _) in vars {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }

        let saved = keys
            .iter()
            .map(|key| (key.to_string(), std::env::var(key).ok()))
            .collect::<Vec<_>>();

        for key in &keys {
            let value = vars
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| *v);
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

fn load_checked() -> anyhow::Result<Config> {
    let config = Config::load_unvalidated()?;
    config.validate()?;
    Ok(config)
}

fn write_config_file(home: &TempDir, contents: &str) {
    let config_dir = home.path().join(".hackbuddy");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config"), contents).unwrap();
}

#[test]
fn load_from_env_only() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GEMINI_API_KEY", Some("env-key")),
        ("HACKBUDDY_TIMEOUT_SECS", Some("45")),
        ("HACKBUDDY_MODEL", Some("gemini-2.0-flash")),
        ("HACKBUDDY_MAX_OUTPUT_TOKENS", Some("4096")),
    ]);

    let config = load_checked().unwrap();
    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.llm.timeout_secs, 45);
    assert_eq!(config.models.analysis, "gemini-2.0-flash");
    assert_eq!(config.models.max_output_tokens, Some(4096));
    assert_eq!(config.export.file_name, DEFAULT_REPORT_FILE_NAME);
}

#[test]
fn load_prefers_env_over_file() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();
    write_config_file(
        &temp_home,
        r#"{
            "llm": { "api_key": "file-key", "timeout_secs": 20 },
            "models": { "analysis": "file-model", "temperature": 0.4 },
            "export": { "directory": "/tmp/reports" }
        }"#,
    );

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GEMINI_API_KEY", Some("env-key")),
        ("HACKBUDDY_TIMEOUT_SECS", Some("40")),
    ]);

    let config = load_checked().unwrap();
    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.llm.timeout_secs, 40);
    assert_eq!(config.models.analysis, "file-model");
    assert_eq!(config.models.temperature, Some(0.4));
    assert_eq!(config.export.directory, PathBuf::from("/tmp/reports"));
}

#[test]
fn load_errors_without_api_key() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

    let err = load_checked().unwrap_err();
    assert!(err.to_string().contains("Gemini API key not found"));

    let unchecked = Config::load_unvalidated().unwrap();
    assert!(unchecked.llm.api_key.is_empty());
    assert_eq!(unchecked.models.analysis, DEFAULT_ANALYSIS_MODEL);
}

#[test]
fn load_rejects_zero_timeout() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GEMINI_API_KEY", Some("env-key")),
        ("HACKBUDDY_TIMEOUT_SECS", Some("0")),
    ]);

    let err = load_checked().unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn load_reports_malformed_file() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();
    write_config_file(&temp_home, "{ not json");

    let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

    let err = Config::load_unvalidated().unwrap_err();
    assert!(err.to_string().contains("Failed parsing JSON config"));
}

#[test]
fn save_persists_nested_structure() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

    let mut config = Config::builder().build();
    config.llm.api_key = "test-key".to_string();
    config.llm.timeout_secs = 55;
    config.models.analysis = "custom-model".to_string();
    config.models.max_output_tokens = Some(999);
    config.export.file_name = "report.md".to_string();
    config.save().unwrap();

    let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
    assert_eq!(json["llm"]["api_key"], "test-key");
    assert_eq!(json["llm"]["timeout_secs"], 55);
    assert_eq!(json["models"]["analysis"], "custom-model");
    assert_eq!(json["models"]["max_output_tokens"], 999);
    assert!(json["models"].get("temperature").is_none());
    assert_eq!(json["export"]["file_name"], "report.md");

    let reloaded = load_checked().unwrap();
    assert_eq!(reloaded.llm.timeout_secs, 55);
    assert_eq!(reloaded.export.file_name, "report.md");
}

#[test]
fn test_env_string() {
    let _lock = env_lock();
    let _env = EnvGuard::new(&[("HACKBUDDY_TEST_VAR", Some("test_value"))]);

    assert_eq!(
        env_string("HACKBUDDY_TEST_VAR").unwrap(),
        Some("test_value".to_string())
    );
    assert_eq!(env_string("HACKBUDDY_NONEXISTENT_VAR").unwrap(), None);
}

#[test]
fn test_env_numbers() {
    let _lock = env_lock();
    let _env = EnvGuard::new(&[
        ("HACKBUDDY_TEST_U64", Some("123")),
        ("HACKBUDDY_TEST_U32", Some("456")),
        ("HACKBUDDY_TEST_BAD", Some("abc")),
    ]);

    assert_eq!(env_u64("HACKBUDDY_TEST_U64").unwrap(), Some(123));
    assert_eq!(env_u32("HACKBUDDY_TEST_U32").unwrap(), Some(456));
    assert_eq!(env_u32("HACKBUDDY_NONEXISTENT_VAR").unwrap(), None);
    assert!(env_u64("HACKBUDDY_TEST_BAD").is_err());
}

#[test]
fn builder_layers_sections_over_defaults() {
    let config = Config::builder()
        .with_llm(|llm| llm.timeout_secs = 12)
        .with_export(|export| export.file_name = "notes.md".to_string())
        .with_llm(|llm| llm.api_key = "layered".to_string())
        .build();

    assert_eq!(config.llm.timeout_secs, 12);
    assert_eq!(config.llm.api_key, "layered");
    assert_eq!(config.models.analysis, DEFAULT_ANALYSIS_MODEL);
    assert_eq!(config.export.file_name, "notes.md");
    assert_eq!(config.export.report_path(), PathBuf::from("./notes.md"));
}
