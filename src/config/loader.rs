use anyhow::{Context, Result};
use dirs::home_dir;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{Config, FileConfig, PersistedConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".watchplan/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads defaults, then the config file, then environment overrides.
    /// The result is not validated so callers can still apply CLI flags.
    pub fn load_unvalidated() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        Ok(builder.build())
    }

    #[cfg(test)]
    pub fn load() -> Result<Self> {
        let config = Self::load_unvalidated()?;
        validate(&config)?;
        Ok(config)
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
    fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        let FileConfig { llm, model } = self;

        builder
            .with_llm(|settings| {
                if let Some(api_key) = llm.api_key {
                    settings.api_key = api_key.trim().to_string();
                }
                if let Some(base_url) = llm.base_url {
                    settings.base_url = base_url;
                }
                if let Some(timeout) = llm.timeout_secs {
                    settings.timeout_secs = timeout;
                }
                if let Some(user_agent) = llm.user_agent {
                    settings.user_agent = user_agent;
                }
            })
            .with_model(|settings| {
                if let Some(name) = model.name {
                    settings.name = name;
                }
                if let Some(temperature) = model.temperature {
                    settings.temperature = temperature;
                }
                if let Some(max_tokens) = model.max_tokens {
                    settings.max_tokens = max_tokens;
                }
                if let Some(retries) = model.retries {
                    settings.retries = retries;
                }
            })
    }
}
