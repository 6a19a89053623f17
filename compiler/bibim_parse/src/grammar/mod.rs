//! Grammar productions, split by construct.

mod container;
mod expr;
mod operators;
