//! Expression evaluation.
//!
//! The [`Interpreter`] owns the run's [`Memory`] and configuration and
//! evaluates [`Expr`] graphs against them. Every operator node is re-run on
//! each evaluation; nothing is cached.
//!
//! # The safe seam
//!
//! Operands, keys and stored values are evaluated through
//! [`Interpreter::eval_safe`], which turns absorbable errors into `Null`
//! according to the [`ErrorMode`](crate::ErrorMode). Errors that survive the
//! seam abort the run.
//!
//! # Depth
//!
//! Cells can read themselves, so evaluation may cycle. Each operator node
//! counts one level against [`EvalConfig::max_depth`]; the native stack is
//! grown on demand underneath.

mod access;
mod func;

use bibim_ir::{Cell, ContainerRef, Expr, Number, Value};
use bibim_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{depth_exceeded, malformed_key, type_mismatch, EvalResult};
use crate::{EvalConfig, Memory, SharedIoHandler};

/// Where a `:` access points.
pub(crate) enum Target {
    Container(ContainerRef),
    Memory,
}

impl Target {
    fn from_value(value: Value) -> EvalResult<Self> {
        match value {
            Value::Container(c) => Ok(Target::Container(c)),
            Value::Memory => Ok(Target::Memory),
            other => Err(type_mismatch("container", &other)),
        }
    }
}

pub struct Interpreter {
    memory: Memory,
    config: EvalConfig,
    depth: usize,
}

impl Interpreter {
    pub fn new(config: EvalConfig, io: SharedIoHandler) -> Self {
        Interpreter {
            memory: Memory::new(io),
            config,
            depth: 0,
        }
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub(crate) fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Evaluate an expression, propagating every error.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Op(func) => {
                if self.depth >= self.config.max_depth {
                    return Err(depth_exceeded(self.config.max_depth));
                }
                self.depth += 1;
                let result = ensure_sufficient_stack(|| self.eval_func(func));
                self.depth -= 1;
                result
            }
        }
    }

    /// Evaluate an expression, replacing absorbable errors with `Null`.
    pub fn eval_safe(&mut self, expr: &Expr) -> EvalResult {
        let result = self.eval(expr);
        self.absorb(result)
    }

    /// Evaluate a cell's key for scanning.
    ///
    /// `None` means the cell takes no part in the scan: its key is `Null`, or
    /// it is not a number and the mode absorbs malformed keys.
    pub fn eval_key(&mut self, cell: &Cell) -> EvalResult<Option<Number>> {
        let key = match self.eval_safe(cell.key()) {
            Ok(Value::Number(key)) => Ok(Some(key)),
            Ok(Value::Null) => Ok(None),
            Ok(other) => self.absorb(Err(malformed_key(&other))).map(|_| None),
            Err(err) => Err(err),
        };
        key.map_err(|e| e.with_span(cell.span()))
    }

    /// The safe seam: absorbable errors read as `Null`.
    fn absorb(&self, result: EvalResult) -> EvalResult {
        self.absorb_or(result, Value::Null)
    }

    /// Like [`Interpreter::absorb`], but an absorbed error reads as `fallback`.
    /// The only place the error mode is consulted.
    fn absorb_or(&self, result: EvalResult, fallback: Value) -> EvalResult {
        match result {
            Err(err) if self.config.mode.absorbs(&err.kind) => {
                trace!(error = %err.kind, %fallback, "absorbed");
                Ok(fallback)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests;
