//! Diagnostic reporting for the Bibim interpreter.
//!
//! Every phase converts its own error type into a [`Diagnostic`] carrying an
//! [`ErrorCode`]; emitters turn diagnostics into text.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
