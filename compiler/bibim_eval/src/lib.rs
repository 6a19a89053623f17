//! Bibim evaluator.
//!
//! Runs a parsed program: the [`Scheduler`] picks cells by their evaluated
//! keys and the [`Interpreter`] evaluates their value expressions against
//! the run's [`Memory`].
//!
//! # Architecture
//!
//! - `interpreter`: expression evaluation, container lookup and store, memory
//! - `operators`: number semantics of each operator
//! - `codec`: string to container and back
//! - `scheduler`: position selection and the run loop
//! - `io_handler`: where the I/O channel reads and writes
//!
//! Errors are typed by [`EvalErrorKind`]; [`ErrorMode`] decides which kinds
//! degrade to `Null`.

mod codec;
pub mod errors;
mod eval_mode;
mod interpreter;
mod io_handler;
mod memory;
mod operators;
mod scheduler;

use bibim_ir::ContainerRef;
use tracing::debug;

pub use codec::from_string;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::{ErrorMode, EvalConfig, DEFAULT_MAX_DEPTH};
pub use interpreter::Interpreter;
pub use io_handler::{
    buffer_handler, stdio_handler, BufferIoHandler, IoHandlerImpl, SharedIoHandler, StdioHandler,
};
pub use memory::{Memory, IO_KEY, POSITION_KEY};
pub use operators::{evaluate_binary, evaluate_non_number_right, evaluate_unary};
pub use scheduler::{RunSummary, Scheduler, SchedulerState, StepOutcome};

/// Run `program` to completion.
pub fn run(
    program: &ContainerRef,
    config: EvalConfig,
    io: SharedIoHandler,
) -> Result<RunSummary, EvalError> {
    debug!(cells = program.len(), mode = ?config.mode, "starting run");
    Scheduler::new(program.clone(), config, io).run()
}

#[cfg(test)]
mod tests;
