//! Bibim IR - value model and expression graph for the Bibim interpreter.
//!
//! # Architecture
//!
//! ```text
//! Number ──► Value ──► Expr / Func ──► Cell ──► Container
//! ```
//!
//! - [`Number`]: exact rational, always reduced, positive denominator
//! - [`Value`]: closed variant `Null | Number | Container | Memory`
//! - [`Expr`]: a literal value or an operator ([`Func`]) evaluated on demand
//! - [`Cell`]: key/value expression pair; the value is the only mutable slot
//! - [`Container`]: insertion-ordered cells behind a shared [`ContainerRef`]
//!
//! Evaluation lives in `bibim_eval`; this crate only defines the shapes and
//! the pure arithmetic on them.

mod container;
mod expr;
mod number;
mod span;
mod value;

pub use container::{Cell, CellRef, Container, ContainerRef};
pub use expr::{BinaryOp, Expr, Func, UnaryOp};
pub use number::{Number, ZeroDenominator};
pub use span::Span;
pub use value::Value;

// Re-export the integer type so downstream crates don't need their own num-bigint
pub use num_bigint::BigInt;
