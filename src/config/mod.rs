//! Configuration management for the watch planner.
//!
//! Settings are layered from defaults, the JSON file at
//! `~/.watchplan/config`, environment variables and finally command-line
//! flags. A missing API key is a fatal startup error.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, ConfigError, LlmSettings, ModelSettings};

#[cfg(test)]
pub(crate) mod tests;
