//! User-facing console text.
//!
//! Validation messages live on [`crate::age::AgeInputError`].

pub const NAME_PROMPT: &str = "이름: ";
pub const DEFAULT_AGE_LABEL: &str = "나이: ";
pub const QUIT_KEYWORD: &str = "q";
pub const QUIT_NOTICE: &str = "입력을 종료합니다.";
pub const EXHAUSTED_NOTICE: &str = "시도 횟수를 초과했습니다. 기본값 0을 사용합니다.";

pub fn age_prompt(label: &str, min: i32, max: i32) -> String {
    format!("{} ({}~{}, 종료: {}) ", label, min, max, QUIT_KEYWORD)
}

pub fn remaining_tries(remaining: u32) -> String {
    format!("남은 시도: {}", remaining)
}

pub fn greeting(name: &str, next_year_age: i64) -> String {
    format!("안녕하세요 {}님, 내년엔 {}살이에요.", name, next_year_age)
}
