//! Operator nodes.
//!
//! Each operand is type-checked as soon as it is evaluated, before the next
//! operand runs. A wrong-typed left side therefore skips the right side's
//! effects entirely. A container on the right of a logic or comparison
//! operator still has a lenient answer; see
//! [`evaluate_non_number_right`](crate::evaluate_non_number_right).

use bibim_ir::{Expr, Func, Number, Value};

use super::{Interpreter, Target};
use crate::errors::{type_mismatch, EvalResult};
use crate::operators::{evaluate_binary, evaluate_non_number_right, evaluate_unary};

impl Interpreter {
    pub(super) fn eval_func(&mut self, func: &Func) -> EvalResult {
        match func {
            Func::Get { container, key } => {
                let target = self.eval_target(container)?;
                let key = self.eval_number(key)?;
                self.get(&target, &key)
            }
            Func::Assign {
                container,
                key,
                value,
            } => {
                let target = self.eval_target(container)?;
                let key = self.eval_number(key)?;
                let value = self.eval_safe(value)?;
                self.set(&target, &key, value)?;
                Ok(Value::Null)
            }
            Func::Unary { op, operand } => {
                let operand = self.eval_number(operand)?;
                Ok(Value::Number(evaluate_unary(&operand, *op)))
            }
            Func::Binary { op, left, right } => {
                let left = self.eval_number(left)?;
                match self.eval_safe(right)? {
                    Value::Number(right) => {
                        evaluate_binary(&left, &right, *op).map(Value::Number)
                    }
                    Value::Null => Err(type_mismatch("number", &Value::Null)),
                    other => {
                        let err = Err(type_mismatch("number", &other));
                        match evaluate_non_number_right(&left, *op) {
                            Some(fallback) => self.absorb_or(err, Value::Number(fallback)),
                            None => err,
                        }
                    }
                }
            }
        }
    }

    fn eval_target(&mut self, expr: &Expr) -> EvalResult<Target> {
        Target::from_value(self.eval_safe(expr)?)
    }

    fn eval_number(&mut self, expr: &Expr) -> EvalResult<Number> {
        match self.eval_safe(expr)? {
            Value::Number(n) => Ok(n),
            other => Err(type_mismatch("number", &other)),
        }
    }
}
