//! Prompt configuration
//!
//! [`PromptConfig`] carries the accepted age range, the retry budget and the
//! label shown in front of the age prompt. [`PromptConfigBuilder`] is the only
//! way to obtain a non-default configuration and rejects combinations the
//! reader loop cannot honour.

pub mod builder;
pub mod types;

pub use builder::PromptConfigBuilder;
pub use types::*;
