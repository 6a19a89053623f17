//! Whole-program evaluation tests.

use bibim_diagnostic::ErrorCode;
use bibim_eval::EvalConfig;
use pretty_assertions::assert_eq;

use crate::common::{run_program, run_with};

const HELLO: &str = include_str!("../../../../../demos/hello.bibim");
const CAT: &str = include_str!("../../../../../demos/cat.bibim");
const COUNTDOWN: &str = include_str!("../../../../../demos/countdown.bibim");

#[test]
fn demo_hello() {
    assert_eq!(run_program(HELLO, ""), "Hello, World!\n");
}

#[test]
fn demo_cat() {
    assert_eq!(run_program(CAT, "line one\nline two\n"), "line one\nline two\n");
    assert_eq!(run_program(CAT, ""), "");
}

#[test]
fn demo_countdown() {
    let (result, output) = run_with(COUNTDOWN, "", EvalConfig::default());
    assert_eq!(result.unwrap().steps, 8);
    assert_eq!(output, "321\n");
}

#[test]
fn countdown_needs_lenient_mode() {
    let (result, output) = run_with(COUNTDOWN, "", EvalConfig::strict());
    // The first scan reads the unset counter.
    assert_eq!(result.unwrap_err().code, ErrorCode::E6002);
    assert_eq!(output, "");
}

#[test]
fn exact_rationals_survive_arithmetic() {
    // 1/3 + 1/6 is exactly 1/2, so 65 + 2 * (1/3 + 1/6) is 66, 'B'.
    assert_eq!(run_program("{[0; @:1 = {[0; 65 + 2 * (1/3 + 1/6)]}]}", ""), "B");
}

#[test]
fn memory_cells_persist_between_steps() {
    let source = "{
        [0; @:7 = 72]
        [1; @:8 = @:7 + 33]
        [2; @:1 = {[0; @:7][1; @:8]}]
    }";
    assert_eq!(run_program(source, ""), "Hi");
}

#[test]
fn input_can_be_read_and_indexed() {
    // Store the input container, then print its second character.
    let source = "{
        [0; @:2 = @:1]
        [1; @:1 = {[0; @:2:1]}]
    }";
    assert_eq!(run_program(source, "xyz"), "y");
}

#[test]
fn containers_are_shared_by_reference() {
    // Memory holds the container itself, so the later write shows up.
    let source = "{
        [0; @:2 = {[0; 72]}]
        [1; @:2:1 = 105]
        [2; @:1 = @:2]
    }";
    assert_eq!(run_program(source, ""), "Hi");
}

#[test]
fn writing_non_container_to_io_fails() {
    let (result, _) = run_with("{[0; @:1 = 5]}", "", EvalConfig::default());
    let diag = result.unwrap_err();
    assert_eq!(diag.code, ErrorCode::E6005);
    assert!(diag.message.starts_with("runtime error: "));
}

#[test]
fn runaway_self_reference_is_reported() {
    let source = "{[0; @:3 = {[0; @:3:0]}][1; @:3:0]}";
    let (result, _) = run_with(source, "", EvalConfig::default().with_max_depth(100));
    assert_eq!(result.unwrap_err().code, ErrorCode::E6007);
}

#[test]
fn strict_and_lenient_disagree_on_type_errors() {
    let source = "{[0; {} + 1][1; @:1 = {[0; 33]}]}";
    assert_eq!(run_program(source, ""), "!");
    let (result, output) = run_with(source, "", EvalConfig::strict());
    assert_eq!(result.unwrap_err().code, ErrorCode::E6002);
    assert_eq!(output, "");
}

#[test]
fn logic_against_a_container_still_yields_a_number() {
    let cases = [("1 & {}", "A"), ("1 | {}", "B"), ("1 ?= {}", "A"), ("1 > {}", "A")];
    for (op, expected) in cases {
        let source = format!("{{[0; @:1 = {{[0; 65 + ({op})]}}]}}");
        assert_eq!(run_program(&source, ""), expected, "{op}");
    }
}
