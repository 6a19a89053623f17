//! The scheduler.
//!
//! A run repeatedly picks the cell to execute next. On each step every key
//! of the root container is re-evaluated; the smallest key strictly greater
//! than the position register wins (any non-negative key on the first
//! step), ties going to the earliest cell. Its key becomes the new position
//! and its value expression is evaluated for effect. A step with no
//! candidate halts the run for good.

use bibim_ir::{CellRef, ContainerRef, Number};
use tracing::debug;

use crate::errors::EvalResult;
use crate::{EvalConfig, Interpreter, SharedIoHandler};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    Halted,
}

/// What one call to [`Scheduler::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Executed the cell with this key.
    Executed(Number),
    Halted,
}

/// Totals for a completed run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
}

pub struct Scheduler {
    program: ContainerRef,
    interpreter: Interpreter,
    state: SchedulerState,
    steps: u64,
}

impl Scheduler {
    pub fn new(program: ContainerRef, config: EvalConfig, io: SharedIoHandler) -> Self {
        let mut interpreter = Interpreter::new(config, io);
        interpreter.memory_mut().reset_position();
        Scheduler {
            program,
            interpreter,
            state: SchedulerState::Running,
            steps: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Run one step. Once halted, further calls report `Halted`.
    ///
    /// A hard error also halts the scheduler.
    pub fn step(&mut self) -> EvalResult<StepOutcome> {
        if self.state == SchedulerState::Halted {
            return Ok(StepOutcome::Halted);
        }
        let result = self.select().and_then(|next| match next {
            Some((key, cell)) => self.execute(key, &cell).map(StepOutcome::Executed),
            None => Ok(StepOutcome::Halted),
        });
        if !matches!(result, Ok(StepOutcome::Executed(_))) {
            self.state = SchedulerState::Halted;
        }
        if let Ok(StepOutcome::Halted) = result {
            debug!(steps = self.steps, "halted");
        }
        result
    }

    /// Step until halted.
    pub fn run(&mut self) -> EvalResult<RunSummary> {
        while let StepOutcome::Executed(_) = self.step()? {}
        Ok(RunSummary { steps: self.steps })
    }

    /// Scan the root container for the next cell to execute.
    fn select(&mut self) -> EvalResult<Option<(Number, CellRef)>> {
        let current = self.interpreter.memory().position().cloned();
        let mut best: Option<(Number, CellRef)> = None;

        let len = self.program.len();
        for index in 0..len {
            let Some(cell) = self.program.cell(index) else {
                break;
            };
            let Some(key) = self
                .interpreter
                .eval_key(&cell)
                .map_err(|e| e.with_position(current.as_ref()))?
            else {
                continue;
            };
            let eligible = match &current {
                None => !key.is_negative(),
                Some(position) => key > *position,
            };
            let better = match &best {
                None => true,
                Some((best_key, _)) => key < *best_key,
            };
            if eligible && better {
                best = Some((key, cell));
            }
        }
        Ok(best)
    }

    fn execute(&mut self, key: Number, cell: &CellRef) -> EvalResult<Number> {
        self.interpreter.memory_mut().set_position(key.clone());
        self.steps += 1;
        debug!(position = %key, step = self.steps, "executing cell");
        let value = cell.value();
        self.interpreter
            .eval_safe(&value)
            .map_err(|e| e.with_position(Some(&key)).with_span(cell.span()))?;
        Ok(key)
    }
}
