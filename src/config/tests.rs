use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

use crate::config::environment::{env_parsed, env_string};
use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::config::{Config, ConfigError};

const MANAGED_VARS: &[&str] = &[
    "GROQ_API_KEY",
    "WATCHPLAN_BASE_URL",
    "WATCHPLAN_TIMEOUT_SECS",
    "WATCHPLAN_MODEL",
    "WATCHPLAN_TEMPERATURE",
    "WATCHPLAN_MAX_TOKENS",
    "WATCHPLAN_RETRIES",
];

pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Sets the given variables and clears every other planner variable.
    pub(crate) fn new(vars: &[(&str, Option<&str>)]) -> Self {
        let mut keys: Vec<&str> = MANAGED_VARS.to_vec();
        keys.extend(vars.iter().map(|(key, _)| *key));

        let saved = keys
            .iter()
            .map(|key| (key.to_string(), std::env::var(key).ok()))
            .collect::<Vec<_>>();

        for key in MANAGED_VARS {
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in vars {
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
        for (key, value) in self.saved.iter().rev() {
            match value {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

fn write_config_file(home: &TempDir, contents: &str) {
    let dir = home.path().join(".watchplan");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config"), contents).unwrap();
}

#[test]
fn defaults_match_fixed_request_parameters() {
    let config = Config::builder().build();
    assert_eq!(config.model.name, DEFAULT_MODEL);
    assert_eq!(config.model.name, "llama-3.1-8b-instant");
    assert!((config.model.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.model.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(config.model.max_tokens, 600);
    assert_eq!(config.model.retries, 0);
    assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
    assert!(config.llm.user_agent.starts_with("watchplan/"));
}

#[test]
fn load_from_env_only() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GROQ_API_KEY", Some("env-key")),
        ("WATCHPLAN_TIMEOUT_SECS", Some("45")),
        ("WATCHPLAN_MODEL", Some("llama-3.3-70b-versatile")),
        ("WATCHPLAN_RETRIES", Some("1")),
    ]);

    let config = Config::load().unwrap();
    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.llm.timeout_secs, 45);
    assert_eq!(config.model.name, "llama-3.3-70b-versatile");
    assert_eq!(config.model.retries, 1);
    assert_eq!(config.model.max_tokens, 600);
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
            "model": { "name": "file-model", "max_tokens": 400 }
        }"#,
    );

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GROQ_API_KEY", Some("env-key")),
        ("WATCHPLAN_TIMEOUT_SECS", Some("40")),
    ]);

    let config = Config::load().unwrap();
    assert_eq!(config.llm.api_key, "env-key");
    assert_eq!(config.llm.timeout_secs, 40);
    assert_eq!(config.model.name, "file-model");
    assert_eq!(config.model.max_tokens, 400);
}

#[test]
fn load_errors_without_api_key() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

    let err = Config::load().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingApiKey { .. })
    ));
    assert!(err.to_string().contains("GROQ_API_KEY not found"));
}

#[test]
fn blank_api_key_is_treated_as_missing() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();
    write_config_file(&temp_home, r#"{ "llm": { "api_key": "   " } }"#);

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GROQ_API_KEY", Some("  ")),
    ]);

    let err = Config::load().unwrap_err();
    assert!(err.to_string().contains("GROQ_API_KEY not found"));
}

#[test]
fn validate_rejects_out_of_range_model_settings() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();
    let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

    let config = Config::builder()
        .with_llm(|llm| llm.api_key = "key".to_string())
        .with_model(|model| model.temperature = 3.5)
        .build();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidTemperature(_))
    ));

    let config = Config::builder()
        .with_llm(|llm| llm.api_key = "key".to_string())
        .with_model(|model| model.max_tokens = 0)
        .build();
    assert!(config.validate().is_err());
}

#[test]
fn zero_timeout_is_rejected() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GROQ_API_KEY", Some("env-key")),
        ("WATCHPLAN_TIMEOUT_SECS", Some("0")),
    ]);

    let err = Config::load().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ZeroTimeout)
    ));
}

#[test]
fn invalid_numeric_env_value_is_reported() {
    let _lock = env_lock();
    let temp_home = TempDir::new().unwrap();
    let home = temp_home.path().to_str().unwrap().to_string();

    let _env = EnvGuard::new(&[
        ("HOME", Some(home.as_str())),
        ("GROQ_API_KEY", Some("env-key")),
        ("WATCHPLAN_MAX_TOKENS", Some("lots")),
    ]);

    let err = Config::load().unwrap_err();
    assert!(err.to_string().contains("WATCHPLAN_MAX_TOKENS"));
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
    config.model.retries = 1;
    config.save().unwrap();

    let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
    assert_eq!(json["llm"]["api_key"], "test-key");
    assert_eq!(json["llm"]["timeout_secs"], 55);
    assert_eq!(json["model"]["name"], "llama-3.1-8b-instant");
    assert_eq!(json["model"]["max_tokens"], 600);
    assert_eq!(json["model"]["retries"], 1);

    let reloaded = Config::load().unwrap();
    assert_eq!(reloaded.llm.api_key, "test-key");
    assert_eq!(reloaded.llm.timeout_secs, 55);
}

#[test]
fn env_helpers_parse_and_skip_missing() {
    let _lock = env_lock();
    let _env = EnvGuard::new(&[
        ("WATCHPLAN_TEST_STRING", Some("value")),
        ("WATCHPLAN_TEST_NUMBER", Some(" 123 ")),
    ]);

    assert_eq!(
        env_string("WATCHPLAN_TEST_STRING").unwrap(),
        Some("value".to_string())
    );
    assert_eq!(env_string("WATCHPLAN_TEST_MISSING").unwrap(), None);
    assert_eq!(env_parsed::<u64>("WATCHPLAN_TEST_NUMBER").unwrap(), Some(123));
    assert_eq!(env_parsed::<u32>("WATCHPLAN_TEST_MISSING").unwrap(), None);
}
