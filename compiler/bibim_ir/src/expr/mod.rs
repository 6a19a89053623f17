//! Expression graph.
//!
//! An [`Expr`] is either a literal [`Value`] or an operator node ([`Func`])
//! that is re-run on every evaluation. Operator nodes sit behind `Rc` so that
//! reading a cell's value expression is a cheap clone.

use std::fmt;
use std::rc::Rc;

use crate::value::MAX_DISPLAY_DEPTH;
use crate::{ContainerRef, Number, Value};

/// A lazily evaluated expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Value),
    Op(Rc<Func>),
}

/// Operator node.
#[derive(Clone, Debug, PartialEq)]
pub enum Func {
    /// `container : key`
    Get { container: Expr, key: Expr },
    /// `container : key = value`
    Assign {
        container: Expr,
        key: Expr,
        value: Expr,
    },
    Unary { op: UnaryOp, operand: Expr },
    Binary { op: BinaryOp, left: Expr, right: Expr },
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
    /// `^x`
    Denominator,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::Denominator => "^",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    Gt,
    Lt,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Eq => "?=",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
        }
    }
}

impl Expr {
    pub fn null() -> Self {
        Expr::Literal(Value::Null)
    }

    pub fn number(n: Number) -> Self {
        Expr::Literal(Value::Number(n))
    }

    pub fn integer(n: i64) -> Self {
        Expr::Literal(Value::integer(n))
    }

    pub fn container(c: ContainerRef) -> Self {
        Expr::Literal(Value::Container(c))
    }

    pub fn memory() -> Self {
        Expr::Literal(Value::Memory)
    }

    pub fn get(container: Expr, key: Expr) -> Self {
        Expr::Op(Rc::new(Func::Get { container, key }))
    }

    pub fn assign(container: Expr, key: Expr, value: Expr) -> Self {
        Expr::Op(Rc::new(Func::Assign {
            container,
            key,
            value,
        }))
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Op(Rc::new(Func::Unary { op, operand }))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Op(Rc::new(Func::Binary { op, left, right }))
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal(v) => Some(v),
            Expr::Op(_) => None,
        }
    }

    pub(crate) fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if depth > MAX_DISPLAY_DEPTH {
            return f.write_str("...");
        }
        match self {
            Expr::Literal(v) => v.fmt_at(f, depth),
            Expr::Op(func) => func.fmt_at(f, depth),
        }
    }
}

impl Func {
    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let next = depth + 1;
        match self {
            Func::Get { container, key } => {
                container.fmt_at(f, next)?;
                f.write_str(":")?;
                key.fmt_at(f, next)
            }
            Func::Assign {
                container,
                key,
                value,
            } => {
                container.fmt_at(f, next)?;
                f.write_str(":")?;
                key.fmt_at(f, next)?;
                f.write_str(" = ")?;
                value.fmt_at(f, next)
            }
            Func::Unary { op, operand } => {
                f.write_str(op.symbol())?;
                operand.fmt_at(f, next)
            }
            Func::Binary { op, left, right } => {
                f.write_str("(")?;
                left.fmt_at(f, next)?;
                write!(f, " {} ", op.symbol())?;
                right.fmt_at(f, next)?;
                f.write_str(")")
            }
        }
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        Expr::Literal(v)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}
