//! End-to-end keypad scenarios driven through a session.

use pretty_assertions::assert_eq;
use std::io::Write;

use zcalc::config::Config;
use zcalc::keypad::Button;
use zcalc::ui::RecordingDisplay;
use zcalc::{Calculator, Operator, Session};

fn run(sequence: &str) -> Session<RecordingDisplay> {
    let mut session = Session::new(RecordingDisplay::new());
    session.feed(sequence).unwrap();
    session
}

fn shown(sequence: &str) -> String {
    run(sequence).display().current().unwrap_or_default().to_string()
}

#[test]
fn addition_is_free_of_float_noise() {
    assert_eq!(shown(".1+.2="), "0.3");
    assert_eq!(shown("0.1+0.2="), "0.3");
}

#[test]
fn division_by_zero_yields_dividend() {
    assert_eq!(shown("5/0="), "5");
    assert_eq!(shown("7.5/0="), "7.5");
}

#[test]
fn operators_chain_left_to_right() {
    let session = run("5+3+");
    assert_eq!(session.display().current(), Some("8"));

    assert_eq!(shown("5+3+2="), "10");
    assert_eq!(shown("2+3*4="), "20");
    assert_eq!(shown("10-4/3="), "2");
}

#[test]
fn minus_after_operator_starts_negative_operand() {
    assert_eq!(shown("5*-3="), "-15");
    assert_eq!(shown("8/-2="), "-4");
    assert_eq!(shown("1+-.5="), "0.5");
}

#[test]
fn bare_minus_is_shown_while_typing() {
    let session = run("5*-");
    assert_eq!(session.display().frames(), ["5", "5", "-"]);
    assert_eq!(session.calculator().pending_operator(), Some(Operator::Multiply));
}

#[test]
fn leading_zeros_suppressed() {
    let session = run("00");
    assert_eq!(session.calculator().current_input(), "0");
    assert_eq!(session.display().frames(), ["0", "0"]);
}

#[test]
fn second_decimal_point_ignored() {
    let session = run("3..");
    assert_eq!(session.calculator().current_input(), "3.");
    assert_eq!(session.display().frames(), ["3", "3.", "3."]);
}

#[test]
fn result_seeds_next_operation() {
    assert_eq!(shown("6*7=-2="), "40");
    assert_eq!(shown("6*7=+"), "42");

    let session = run("6*7=+");
    assert_eq!(session.calculator().previous_operand(), Some(42.0));
    assert!(session.calculator().is_awaiting_operand());
    assert!(!session.calculator().is_just_evaluated());
}

#[test]
fn digit_after_result_starts_new_calculation() {
    assert_eq!(shown("2+2=9"), "9");
    assert_eq!(shown("2+2=9+1="), "10");
}

#[test]
fn clear_resets_after_any_sequence() {
    for sequence in ["", "123", "5*-", "1.5+2.5=", "9/0=+", "..--++", "7-c"] {
        let mut session = run(sequence);
        session.press(Button::Clear).unwrap();
        assert_eq!(session.calculator(), &Calculator::new(), "after {:?}", sequence);
        assert_eq!(session.display().current(), Some("0"));
    }
}

#[test]
fn long_results_are_reformatted() {
    // 123456789 × 10000 = 1234567890000 (13 characters, ≥ 10^12)
    assert_eq!(shown("123456789*10000="), "1.234568e+12");

    // 12345 + 0.12345678 = 12345.12345678 (14 characters, < 10^12)
    assert_eq!(shown("12345+.12345678="), "12345.1234568");
}

#[test]
fn long_typed_operands_are_reformatted() {
    assert_eq!(shown("1234567890123"), "1.234568e+12");
    assert_eq!(shown("123456789012"), "123456789012");
}

#[test]
fn evaluate_without_operator_does_nothing() {
    let session = run("42=");
    assert_eq!(session.calculator().current_input(), "42");
    assert!(!session.calculator().is_just_evaluated());
}

#[test]
fn evaluate_on_bare_minus_does_nothing() {
    let session = run("5*-=");
    assert_eq!(session.calculator().current_input(), "-");
    assert_eq!(session.calculator().previous_operand(), Some(5.0));
}

#[test]
fn snapshot_serializes_to_json() {
    let session = run("5*");
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["current_input"], "5");
    assert_eq!(json["pending_operator"], "multiply");
    assert_eq!(json["awaiting_operand"], true);
    assert_eq!(json["display"], "5");
}

#[test]
fn config_aliases_drive_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[keys]\naliases = {{ \"p\" = \"add\", \"e\" = \"equals\" }}").unwrap();

    let config = Config::load(file.path()).unwrap();
    let mut session = Session::with_keymap(RecordingDisplay::new(), config.keymap().unwrap());
    session.feed("4p4e").unwrap();
    assert_eq!(session.display().current(), Some("8"));
}

#[test]
fn unreadable_config_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}
