//! Name, age, greeting

use crate::age::Age;
use crate::config::PromptConfig;
use crate::console::Console;
use crate::errors::InsaError;
use crate::messages;
use crate::reader::read_validated_age;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Greeted { name: String, age: Age },
    Quit,
}

/// Prompt for a name. End of input yields an empty name.
pub fn read_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String, InsaError> {
    console.prompt(messages::NAME_PROMPT)?;
    let name = console.read_line()?.unwrap_or_default();
    log::debug!("Read name of {} chars", name.chars().count());
    Ok(name)
}

pub fn greeting(name: &str, age: Age) -> String {
    messages::greeting(name, age.next_year())
}

/// Run one full interaction. The greeting is never printed after a quit.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &PromptConfig,
) -> Result<SessionOutcome, InsaError> {
    let name = read_name(console)?;

    let Some(age) = read_validated_age(console, config)?.age() else {
        return Ok(SessionOutcome::Quit);
    };

    console.say(&greeting(&name, age))?;
    Ok(SessionOutcome::Greeted { name, age })
}
