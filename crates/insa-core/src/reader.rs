//! Bounded-retry age prompt
//!
//! Each attempt prompts, reads one line and classifies it. End of input ends
//! the loop at once without consuming an attempt. The quit keyword ends it
//! with [`AgeReading::Quit`], which callers must treat as a request to stop
//! the whole program rather than as an age.

use crate::age::{trim_blank, validate_age, Age};
use crate::config::PromptConfig;
use crate::console::Console;
use crate::errors::InsaError;
use crate::messages;
use std::io::{BufRead, Write};

/// Outcome of [`read_validated_age`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeReading {
    Accepted(Age),
    EndOfInput,
    Exhausted,
    Quit,
}

impl AgeReading {
    /// The age to use, or `None` when the user asked to quit
    pub fn age(self) -> Option<Age> {
        match self {
            AgeReading::Accepted(age) => Some(age),
            AgeReading::EndOfInput | AgeReading::Exhausted => Some(Age::default()),
            AgeReading::Quit => None,
        }
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case(messages::QUIT_KEYWORD)
}

/// Prompt for an age until a valid one is entered or the budget runs out
pub fn read_validated_age<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &PromptConfig,
) -> Result<AgeReading, InsaError> {
    let prompt = messages::age_prompt(config.age_label(), config.min_age(), config.max_age());

    for attempt in 1..=config.max_tries() {
        console.prompt(&prompt)?;

        let Some(raw) = console.read_line()? else {
            log::info!("Input closed at attempt {}; using fallback age", attempt);
            return Ok(AgeReading::EndOfInput);
        };
        let line = trim_blank(&raw);

        if is_quit(line) {
            log::info!("Quit requested at attempt {}", attempt);
            console.say(messages::QUIT_NOTICE)?;
            return Ok(AgeReading::Quit);
        }

        match validate_age(line, config) {
            Ok(age) => {
                log::info!("Accepted age {} at attempt {}", age, attempt);
                return Ok(AgeReading::Accepted(age));
            }
            Err(e) => {
                log::debug!("Attempt {} rejected {:?}: {:?}", attempt, line, e);
                console.say(&e.to_string())?;
            }
        }

        console.say(&messages::remaining_tries(config.max_tries() - attempt))?;
    }

    log::info!(
        "Retry budget of {} exhausted; using fallback age",
        config.max_tries()
    );
    console.say(messages::EXHAUSTED_NOTICE)?;
    Ok(AgeReading::Exhausted)
}
