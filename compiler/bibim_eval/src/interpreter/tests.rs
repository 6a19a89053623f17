#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use bibim_ir::{Cell, ContainerRef, Expr, Number, Span, Value};
use pretty_assertions::assert_eq;

use super::*;
use crate::{buffer_handler, EvalErrorKind, SharedIoHandler};

/// Parse `expr` as the value of a one-cell program and return it.
fn expr(source: &str) -> Expr {
    let program = bibim_parse::parse(&format!("{{[0; {source}]}}")).unwrap();
    program.cell(0).unwrap().value()
}

fn lenient() -> Interpreter {
    Interpreter::new(EvalConfig::default(), buffer_handler(""))
}

fn strict() -> Interpreter {
    Interpreter::new(EvalConfig::strict(), buffer_handler(""))
}

fn with_io(io: &SharedIoHandler) -> Interpreter {
    Interpreter::new(EvalConfig::default(), io.clone())
}

#[test]
fn literals_evaluate_to_themselves() {
    let mut interp = lenient();
    assert_eq!(interp.eval(&expr("7")).unwrap(), Value::integer(7));
    assert_eq!(interp.eval(&expr("@")).unwrap(), Value::Memory);
}

#[test]
fn arithmetic_is_exact() {
    let mut interp = lenient();
    assert_eq!(
        interp.eval(&expr("1/3 + 1/6")).unwrap(),
        Value::Number(Number::new(1, 2).unwrap())
    );
    assert_eq!(interp.eval(&expr("^(3/4)")).unwrap(), Value::integer(4));
    assert_eq!(interp.eval(&expr("-2 * 3")).unwrap(), Value::integer(-6));
}

#[test]
fn missing_key_is_null_in_both_modes() {
    assert_eq!(lenient().eval_safe(&expr("{[1; 2]}:5")).unwrap(), Value::Null);
    assert_eq!(strict().eval_safe(&expr("{[1; 2]}:5")).unwrap(), Value::Null);
}

#[test]
fn get_evaluates_stored_expression_each_time() {
    let mut interp = lenient();
    assert_eq!(interp.eval(&expr("{[1; 2 + 3]}:1")).unwrap(), Value::integer(5));
}

#[test]
fn memory_assign_then_get() {
    let mut interp = lenient();
    assert_eq!(interp.eval(&expr("@:7 = 42")).unwrap(), Value::Null);
    assert_eq!(interp.eval(&expr("@:7")).unwrap(), Value::integer(42));
    assert_eq!(interp.memory().storage().len(), 1);

    interp.eval(&expr("@:7 = 43")).unwrap();
    assert_eq!(interp.eval(&expr("@:7")).unwrap(), Value::integer(43));
    assert_eq!(interp.memory().storage().len(), 1);
}

#[test]
fn assign_stores_evaluated_value() {
    let mut interp = lenient();
    interp.eval(&expr("@:2 = 1")).unwrap();
    interp.eval(&expr("@:3 = @:2 + 1")).unwrap();
    interp.eval(&expr("@:2 = 10")).unwrap();
    assert_eq!(interp.eval(&expr("@:3")).unwrap(), Value::integer(2));
}

#[test]
fn position_register_ignores_public_writes() {
    let mut interp = lenient();
    assert_eq!(interp.eval(&expr("@:0")).unwrap(), Value::Null);
    interp.eval(&expr("@:0 = 9")).unwrap();
    assert_eq!(interp.eval(&expr("@:0")).unwrap(), Value::Null);

    interp.memory_mut().set_position(Number::integer(3));
    assert_eq!(interp.eval(&expr("@:0")).unwrap(), Value::integer(3));
}

#[test]
fn type_mismatch_is_null_when_lenient() {
    assert_eq!(lenient().eval_safe(&expr("1:2")).unwrap(), Value::Null);
    assert_eq!(lenient().eval_safe(&expr("{} + 1")).unwrap(), Value::Null);
}

#[test]
fn type_mismatch_raises_when_strict() {
    let err = strict().eval_safe(&expr("1:2")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "container",
            got: "number",
        }
    );
}

#[test]
fn container_on_right_of_logic_and_comparison_is_lenient_number() {
    let mut interp = lenient();
    assert_eq!(interp.eval_safe(&expr("1 & {}")).unwrap(), Value::integer(0));
    assert_eq!(interp.eval_safe(&expr("1 | {}")).unwrap(), Value::integer(1));
    assert_eq!(interp.eval_safe(&expr("0 | @")).unwrap(), Value::integer(0));
    assert_eq!(interp.eval_safe(&expr("1 ?= {}")).unwrap(), Value::integer(0));
    assert_eq!(interp.eval_safe(&expr("1 > {}")).unwrap(), Value::integer(0));
    assert_eq!(interp.eval_safe(&expr("1 < @")).unwrap(), Value::integer(0));
}

#[test]
fn container_on_right_of_arithmetic_is_null() {
    let mut interp = lenient();
    assert_eq!(interp.eval_safe(&expr("1 + {}")).unwrap(), Value::Null);
    assert_eq!(interp.eval_safe(&expr("{} & 1")).unwrap(), Value::Null);
    assert_eq!(interp.eval_safe(&expr("1 | @:9")).unwrap(), Value::Null);
}

#[test]
fn container_on_right_of_logic_raises_when_strict() {
    for source in ["1 & {}", "1 | {}", "1 ?= {}", "1 > {}", "1 < {}"] {
        let err = strict().eval_safe(&expr(source)).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "number",
                got: "container",
            },
            "{source}"
        );
    }
}

#[test]
fn wrong_left_operand_skips_right_effects() {
    let mut interp = lenient();
    assert_eq!(interp.eval_safe(&expr("{} + (@:5 = 1)")).unwrap(), Value::Null);
    assert_eq!(interp.eval_safe(&expr("@:5")).unwrap(), Value::Null);
    assert!(interp.memory().storage().is_empty());
}

#[test]
fn null_operand_propagates_as_type_mismatch() {
    let err = strict().eval_safe(&expr("@:9 + 1")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "number",
            got: "null",
        }
    );
}

#[test]
fn division_by_zero() {
    assert_eq!(lenient().eval_safe(&expr("1/0")).unwrap(), Value::Null);
    let err = strict().eval_safe(&expr("1/0")).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::Construction);
}

#[test]
fn lookup_returns_first_duplicate_and_store_replaces_it() {
    let container = ContainerRef::from_cells([
        Cell::new(Expr::integer(4), Expr::integer(1)),
        Cell::new(Expr::integer(4), Expr::integer(2)),
    ]);
    let mut interp = lenient();
    let key = Number::integer(4);
    let hit = interp.lookup(&container, &key).unwrap().unwrap();
    assert_eq!(hit.value(), Expr::integer(1));

    interp.store(&container, &key, Value::integer(9)).unwrap();
    assert_eq!(container.cell(0).unwrap().value(), Expr::integer(9));
    assert_eq!(container.cell(1).unwrap().value(), Expr::integer(2));
    assert_eq!(container.len(), 2);
}

#[test]
fn store_appends_new_keys() {
    let container = ContainerRef::default();
    let mut interp = lenient();
    interp
        .store(&container, &Number::integer(3), Value::integer(1))
        .unwrap();
    assert_eq!(container.len(), 1);
    assert_eq!(container.cell(0).unwrap().key(), &Expr::integer(3));
}

#[test]
fn null_keys_never_match() {
    let mut interp = lenient();
    assert_eq!(interp.eval(&expr("{[@:8; 1][2; 3]}:2")).unwrap(), Value::integer(3));
}

#[test]
fn malformed_key_is_skipped_when_lenient() {
    let source = expr("{[{}; 1][2; 3]}:2");
    assert_eq!(lenient().eval_safe(&source).unwrap(), Value::integer(3));
}

#[test]
fn malformed_key_raises_when_strict() {
    let container = ContainerRef::from_cells([
        Cell::new(Expr::memory(), Expr::integer(1)).with_span(Span::new(3, 9)),
        Cell::new(Expr::integer(2), Expr::integer(3)),
    ]);
    let err = strict().lookup(&container, &Number::integer(2)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::MalformedProgram { got: "memory" });
    assert_eq!(err.span, Some(Span::new(3, 9)));
}

#[test]
fn reading_io_channel_drains_input() {
    let io = buffer_handler("hi");
    let mut interp = with_io(&io);
    let Value::Container(input) = interp.eval(&expr("@:1")).unwrap() else {
        panic!("input is not a container");
    };
    assert_eq!(interp.container_text(&input).unwrap(), "hi");
    let Value::Container(rest) = interp.eval(&expr("@:1")).unwrap() else {
        panic!("input is not a container");
    };
    assert!(rest.is_empty());
}

#[test]
fn writing_io_channel_emits_text() {
    let io = buffer_handler("");
    let mut interp = with_io(&io);
    interp.eval(&expr("@:1 = {[0; 79][1; 75]}")).unwrap();
    assert_eq!(io.output(), "OK");
}

#[test]
fn writing_number_to_io_is_hard_error() {
    let err = lenient().eval_safe(&expr("@:1 = 5")).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IoChannelType { got: "number" });
}

#[test]
fn self_reference_hits_depth_limit() {
    let container = ContainerRef::default();
    container.push(Cell::new(
        Expr::integer(0),
        Expr::get(Expr::container(container.clone()), Expr::integer(0)),
    ));
    let mut interp = Interpreter::new(EvalConfig::default().with_max_depth(64), buffer_handler(""));
    let err = interp
        .eval_safe(&Expr::get(Expr::container(container), Expr::integer(0)))
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DepthExceeded { limit: 64 });

    // The depth counter unwinds with the error.
    assert_eq!(interp.eval(&expr("1 + 1")).unwrap(), Value::integer(2));
}

#[test]
fn deep_expression_within_limit() {
    let source = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    let nested = (0..2000).fold(expr(&source), |acc, _| {
        Expr::binary(bibim_ir::BinaryOp::Add, acc, Expr::integer(1))
    });
    assert_eq!(lenient().eval(&nested).unwrap(), Value::integer(2001));
}
