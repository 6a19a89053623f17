//! Runtime values.

use std::fmt;

use crate::{ContainerRef, Number};

/// Nesting depth at which `Display` stops descending.
///
/// Containers may reference themselves (directly or through memory), so
/// rendering must terminate without evaluating anything.
pub(crate) const MAX_DISPLAY_DEPTH: usize = 32;

/// A Bibim value.
///
/// `Null` is the absorption target for recoverable errors. `Memory` is a
/// handle for the `@` literal; it resolves to whatever memory the evaluating
/// interpreter owns.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Number(Number),
    Container(ContainerRef),
    Memory,
}

impl Value {
    pub fn integer(n: i64) -> Self {
        Value::Number(Number::integer(n))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Short name used in type mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Container(_) => "container",
            Value::Memory => "memory",
        }
    }

    pub(crate) fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Container(c) => c.fmt_at(f, depth),
            Value::Memory => f.write_str("@"),
        }
    }
}

/// Containers compare by identity; everything else structurally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Memory, Value::Memory) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Container(a), Value::Container(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<ContainerRef> for Value {
    fn from(c: ContainerRef) -> Self {
        Value::Container(c)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}
