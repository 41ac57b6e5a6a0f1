use anyhow::{Context, Result, anyhow};
use std::env;
use std::str::FromStr;

use super::builder::ConfigBuilder;
use super::constants::API_KEY_ENV_VAR;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(api_key) = env_string(API_KEY_ENV_VAR)? {
        builder = builder.with_llm(|llm| llm.api_key = api_key.trim().to_string());
    }

    if let Some(base_url) = env_string("WATCHPLAN_BASE_URL")? {
        builder = builder.with_llm(|llm| llm.base_url = base_url);
    }

    if let Some(timeout) = env_parsed::<u64>("WATCHPLAN_TIMEOUT_SECS")? {
        builder = builder.with_llm(|llm| llm.timeout_secs = timeout);
    }

    if let Some(model) = env_string("WATCHPLAN_MODEL")? {
        builder = builder.with_model(|settings| settings.name = model);
    }

    if let Some(temperature) = env_parsed::<f32>("WATCHPLAN_TEMPERATURE")? {
        builder = builder.with_model(|settings| settings.temperature = temperature);
    }

    if let Some(max_tokens) = env_parsed::<u32>("WATCHPLAN_MAX_TOKENS")? {
        builder = builder.with_model(|settings| settings.max_tokens = max_tokens);
    }

    if let Some(retries) = env_parsed::<u32>("WATCHPLAN_RETRIES")? {
        builder = builder.with_model(|settings| settings.retries = retries);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_parsed<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env_string(key)? {
        Some(value) => {
            let parsed = value
                .trim()
                .parse::<T>()
                .with_context(|| format!("Failed to parse {key} value '{value}'"))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}
