//! End-to-end console scenarios for the greeting session

use insa_core::{run_session, Console, PromptConfig, SessionOutcome};
use std::io::Cursor;

const PROMPT: &str = "나이:  (0~150, 종료: q) ";

fn run(input: &str) -> (SessionOutcome, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let outcome = run_session(&mut console, &PromptConfig::default()).unwrap();
    let (_, out) = console.into_parts();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_valid_age_greets_with_next_year() {
    let (outcome, out) = run("Alice\n30\n");
    match outcome {
        SessionOutcome::Greeted { name, age } => {
            assert_eq!(name, "Alice");
            assert_eq!(age.value(), 30);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(
        out,
        format!("이름: {PROMPT}안녕하세요 Alice님, 내년엔 31살이에요.\n")
    );
}

#[test]
fn test_quit_after_parse_and_range_errors() {
    let (outcome, out) = run("Bob\nabc\n200\nq\n");
    assert_eq!(outcome, SessionOutcome::Quit);
    assert_eq!(
        out,
        format!(
            "이름: {PROMPT}숫자를 올바르게 입력하세요. 예: 23\n남은 시도: 2\n\
             {PROMPT}범위를 벗어났습니다. 0~150 사이로 입력하세요.\n남은 시도: 1\n\
             {PROMPT}입력을 종료합니다.\n"
        )
    );
}

#[test]
fn test_exhausted_budget_uses_zero() {
    let (outcome, out) = run("Eve\n-5\n999\nx\n");
    match outcome {
        SessionOutcome::Greeted { age, .. } => assert_eq!(age.value(), 0),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(
        out,
        format!(
            "이름: {PROMPT}범위를 벗어났습니다. 0~150 사이로 입력하세요.\n남은 시도: 2\n\
             {PROMPT}범위를 벗어났습니다. 0~150 사이로 입력하세요.\n남은 시도: 1\n\
             {PROMPT}숫자를 올바르게 입력하세요. 예: 23\n남은 시도: 0\n\
             시도 횟수를 초과했습니다. 기본값 0을 사용합니다.\n\
             안녕하세요 Eve님, 내년엔 1살이에요.\n"
        )
    );
}

#[test]
fn test_only_first_integer_is_used() {
    let (outcome, out) = run("Dan\n5 10\n");
    match outcome {
        SessionOutcome::Greeted { age, .. } => assert_eq!(age.value(), 5),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(out.ends_with("안녕하세요 Dan님, 내년엔 6살이에요.\n"));
}

#[test]
fn test_input_closed_during_age_prompt() {
    let (outcome, out) = run("Mina\nabc\n");
    match outcome {
        SessionOutcome::Greeted { age, .. } => assert_eq!(age.value(), 0),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(!out.contains("시도 횟수를 초과했습니다"));
    assert!(out.ends_with("안녕하세요 Mina님, 내년엔 1살이에요.\n"));
}
