use anyhow::Result;

use super::constants::API_KEY_ENV_VAR;
use super::types::{Config, ConfigError};

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(ConfigError::MissingApiKey {
            env_var: API_KEY_ENV_VAR,
            path: Config::config_path()?,
        }
        .into());
    }

    if config.llm.base_url.trim().is_empty() {
        return Err(ConfigError::EmptyBaseUrl.into());
    }

    if config.llm.timeout_secs == 0 {
        return Err(ConfigError::ZeroTimeout.into());
    }

    let temperature = config.model.temperature;
    if !(0.0..=2.0).contains(&temperature) {
        return Err(ConfigError::InvalidTemperature(temperature).into());
    }

    if config.model.max_tokens == 0 {
        return Err(ConfigError::ZeroMaxTokens.into());
    }

    Ok(())
}
