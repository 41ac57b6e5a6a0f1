use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub model: ModelSettings,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Extra attempts after a transient failure. Zero disables retrying.
    pub retries: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{env_var} not found. Set {env_var} or run 'watchplan --setup' to store it in {}", .path.display())]
    MissingApiKey { env_var: &'static str, path: PathBuf },

    #[error("Temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("max_tokens must be greater than zero")]
    ZeroMaxTokens,

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: FileLlmSettings,
    #[serde(default)]
    pub model: FileModelSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileLlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileModelSettings {
    pub name: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub retries: Option<u32>,
}

#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub llm: PersistedLlm<'a>,
    pub model: PersistedModel<'a>,
}

#[derive(Serialize)]
pub(super) struct PersistedLlm<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub timeout_secs: u64,
}

#[derive(Serialize)]
pub(super) struct PersistedModel<'a> {
    pub name: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub retries: u32,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            llm: PersistedLlm {
                api_key: &config.llm.api_key,
                base_url: &config.llm.base_url,
                timeout_secs: config.llm.timeout_secs,
            },
            model: PersistedModel {
                name: &config.model.name,
                temperature: config.model.temperature,
                max_tokens: config.model.max_tokens,
                retries: config.model.retries,
            },
        }
    }
}
