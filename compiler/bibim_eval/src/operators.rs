//! Operator semantics over numbers.
//!
//! Operand type checks happen in the interpreter, which sees `Value`s; these
//! functions only run once both sides are known to be numbers, except for
//! [`evaluate_non_number_right`].

use bibim_ir::{BinaryOp, Number, UnaryOp};

use crate::errors::{construction_error, EvalResult};

/// Apply a binary operator. Only division can fail.
pub fn evaluate_binary(left: &Number, right: &Number, op: BinaryOp) -> EvalResult<Number> {
    let result = match op {
        BinaryOp::Add => left.add(right),
        BinaryOp::Sub => left.sub(right),
        BinaryOp::Mul => left.mul(right),
        BinaryOp::Div => left.div(right).map_err(|_| construction_error())?,
        BinaryOp::And => left.and(right),
        BinaryOp::Or => left.or(right),
        BinaryOp::Eq => left.eq_number(right),
        BinaryOp::Gt => left.gt_number(right),
        BinaryOp::Lt => left.lt_number(right),
    };
    Ok(result)
}

/// Lenient result of `left op x` where `x` is a container or memory.
///
/// Logic and comparison operators still have an answer: `&` and the
/// comparisons are zero, `|` is the boolean cast of `left`. Arithmetic has
/// none and returns `None`.
pub fn evaluate_non_number_right(left: &Number, op: BinaryOp) -> Option<Number> {
    match op {
        BinaryOp::And | BinaryOp::Eq | BinaryOp::Gt | BinaryOp::Lt => Some(Number::zero()),
        BinaryOp::Or => Some(left.bool_cast()),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => None,
    }
}

pub fn evaluate_unary(operand: &Number, op: UnaryOp) -> Number {
    match op {
        UnaryOp::Neg => operand.neg(),
        UnaryOp::Not => operand.not(),
        UnaryOp::Denominator => operand.denominator_number(),
    }
}
