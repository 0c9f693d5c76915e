//! Fluent builder for [`PromptConfig`]

use crate::config::types::*;
use crate::errors::InsaError;

/// Builder for creating prompt configurations
#[derive(Debug, Clone, Default)]
pub struct PromptConfigBuilder {
    config: PromptConfig,
}

impl PromptConfigBuilder {
    /// Create a new builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound of accepted ages
    pub fn min_age(mut self, min_age: i32) -> Self {
        self.config.min_age = min_age;
        self
    }

    /// Set the inclusive upper bound of accepted ages
    pub fn max_age(mut self, max_age: i32) -> Self {
        self.config.max_age = max_age;
        self
    }

    /// Set how many invalid attempts are allowed before falling back
    pub fn max_tries(mut self, max_tries: u32) -> Self {
        self.config.max_tries = max_tries;
        self
    }

    /// Set the label printed in front of the age prompt
    pub fn age_label(mut self, label: impl Into<String>) -> Self {
        self.config.age_label = label.into();
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<PromptConfig, InsaError> {
        if self.config.min_age > self.config.max_age {
            return Err(InsaError::ConfigError(format!(
                "min_age ({}) must not exceed max_age ({})",
                self.config.min_age, self.config.max_age
            )));
        }
        if self.config.max_tries == 0 {
            return Err(InsaError::ConfigError(
                "max_tries must be at least 1".to_string(),
            ));
        }
        Ok(self.config)
    }
}
