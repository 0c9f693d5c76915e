//! Age parsing and range validation
//!
//! Only the leading integer of a line is considered: an optional sign and a
//! run of ASCII digits at the start of the first token. Anything after it is
//! ignored, so `"5 10"` and `"12abc"` yield 5 and 12. Values that do not fit
//! an `i32` are treated as unparseable.

use crate::config::{PromptConfig, FALLBACK_AGE};
use std::fmt;
use thiserror::Error;

/// Why a single age attempt was rejected. `Display` is the console message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeInputError {
    #[error("숫자를 올바르게 입력하세요. 예: 23")]
    NotANumber,
    #[error("범위를 벗어났습니다. {min}~{max} 사이로 입력하세요.")]
    OutOfRange { value: i32, min: i32, max: i32 },
}

/// A validated age
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(i32);

impl Age {
    pub fn value(self) -> i32 {
        self.0
    }

    /// The age one year from now
    pub fn next_year(self) -> i64 {
        i64::from(self.0) + 1
    }
}

impl Default for Age {
    fn default() -> Self {
        Age(FALLBACK_AGE)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whitespace as recognised by the C locale: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub(crate) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

pub(crate) fn trim_blank(line: &str) -> &str {
    line.trim_matches(is_blank)
}

/// Parse the leading integer of `line`.
pub fn parse_first_int(line: &str) -> Option<i32> {
    let s = line.trim_start_matches(is_blank);
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Parse and range-check one stripped input line
pub fn validate_age(line: &str, config: &PromptConfig) -> Result<Age, AgeInputError> {
    let value = parse_first_int(line).ok_or(AgeInputError::NotANumber)?;
    if !config.accepts(value) {
        return Err(AgeInputError::OutOfRange {
            value,
            min: config.min_age(),
            max: config.max_age(),
        });
    }
    Ok(Age(value))
}
