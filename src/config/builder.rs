use super::types::{Config, LlmSettings, ModelSettings};

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) model: ModelSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_model<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ModelSettings),
    {
        update(&mut self.model);
        self
    }

    /// Assembles the configuration without validating it.
    pub fn build(self) -> Config {
        Config {
            llm: self.llm,
            model: self.model,
        }
    }
}
