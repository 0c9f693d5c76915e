use crate::messages::DEFAULT_AGE_LABEL;

pub const DEFAULT_MIN_AGE: i32 = 0;
pub const DEFAULT_MAX_AGE: i32 = 150;
pub const DEFAULT_MAX_TRIES: u32 = 3;

/// Age used whenever validation is abandoned.
pub const FALLBACK_AGE: i32 = 0;

/// Settings for the validated age prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub(crate) min_age: i32,
    pub(crate) max_age: i32,
    pub(crate) max_tries: u32,
    pub(crate) age_label: String,
}

impl PromptConfig {
    pub fn min_age(&self) -> i32 {
        self.min_age
    }

    pub fn max_age(&self) -> i32 {
        self.max_age
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    pub fn age_label(&self) -> &str {
        &self.age_label
    }

    /// Whether `value` lies inside the inclusive accepted range
    pub fn accepts(&self, value: i32) -> bool {
        (self.min_age..=self.max_age).contains(&value)
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            max_tries: DEFAULT_MAX_TRIES,
            age_label: DEFAULT_AGE_LABEL.to_string(),
        }
    }
}
