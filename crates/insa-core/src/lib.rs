//! Interactive console greeter with bounded-retry integer input.
//!
//! This crate provides the pieces behind the `insa` binary: a line-oriented
//! console over any reader/writer pair, leading-integer parsing and range
//! validation for ages, the retry loop that turns raw lines into an
//! [`AgeReading`], and the session flow that ties name, age and greeting
//! together.
//!
//! # Architecture Overview
//!
//! - **Console**: prompt, message and line primitives with explicit flushing
//! - **Age parsing**: first-integer extraction and range checks
//! - **Reader**: the attempt loop with its retry budget and quit keyword
//! - **Session**: read name, read age, greet
//! - **Configuration**: validated range, retry budget and prompt label

pub mod age;
pub mod config;
pub mod console;
pub mod errors;
pub mod messages;
pub mod reader;
pub mod session;

pub use age::{parse_first_int, Age, AgeInputError};
pub use config::{PromptConfig, PromptConfigBuilder};
pub use console::Console;
pub use errors::InsaError;
pub use reader::{read_validated_age, AgeReading};
pub use session::{greeting, read_name, run_session, SessionOutcome};
