//! Container and memory access.
//!
//! Lookup is a linear scan in insertion order. Keys are expressions and are
//! evaluated on every scan, so a scan can grow the container it is walking;
//! it visits only the cells present when it started.

use bibim_ir::{Cell, CellRef, ContainerRef, Expr, Number, Value};
use tracing::trace;

use super::{Interpreter, Target};
use crate::codec::from_string;
use crate::errors::{io_channel_type, io_failure, lookup_miss, EvalResult};
use crate::memory::ReservedKey;

impl Interpreter {
    /// `target : key`. A missing key is a `LookupMiss`, absorbed by the seam.
    pub(crate) fn get(&mut self, target: &Target, key: &Number) -> EvalResult {
        self.fetch(target, key)?.ok_or_else(|| lookup_miss(key))
    }

    /// Value stored under `key`, or `None` if no cell matches.
    pub(crate) fn fetch(&mut self, target: &Target, key: &Number) -> EvalResult<Option<Value>> {
        match target {
            Target::Container(container) => self.fetch_cell(container, key),
            Target::Memory => match ReservedKey::of(key) {
                Some(ReservedKey::Position) => Ok(Some(
                    self.memory
                        .position()
                        .cloned()
                        .map_or(Value::Null, Value::Number),
                )),
                Some(ReservedKey::Io) => self.read_input().map(Some),
                None => {
                    let storage = self.memory.storage().clone();
                    self.fetch_cell(&storage, key)
                }
            },
        }
    }

    /// `target : key = value`.
    pub(crate) fn set(&mut self, target: &Target, key: &Number, value: Value) -> EvalResult<()> {
        match target {
            Target::Container(container) => self.store(container, key, value),
            Target::Memory => match ReservedKey::of(key) {
                Some(ReservedKey::Position) => {
                    trace!("write to position register ignored");
                    Ok(())
                }
                Some(ReservedKey::Io) => self.write_output(value),
                None => {
                    let storage = self.memory.storage().clone();
                    self.store(&storage, key, value)
                }
            },
        }
    }

    /// First cell whose key evaluates to `key`.
    ///
    /// Keys evaluating to `Null` never match. Keys evaluating to a container
    /// or memory are malformed; see [`Interpreter::eval_key`].
    pub fn lookup(
        &mut self,
        container: &ContainerRef,
        key: &Number,
    ) -> EvalResult<Option<CellRef>> {
        let len = container.len();
        for index in 0..len {
            let Some(cell) = container.cell(index) else {
                break;
            };
            if self.eval_key(&cell)?.as_ref() == Some(key) {
                trace!(%key, index, "lookup hit");
                return Ok(Some(cell));
            }
        }
        trace!(%key, scanned = len, "lookup miss");
        Ok(None)
    }

    /// Replace the value of the first cell keyed `key`, or append a new cell.
    pub fn store(
        &mut self,
        container: &ContainerRef,
        key: &Number,
        value: Value,
    ) -> EvalResult<()> {
        match self.lookup(container, key)? {
            Some(cell) => cell.set_expr(Expr::Literal(value)),
            None => container.push(Cell::new(Expr::number(key.clone()), Expr::Literal(value))),
        }
        Ok(())
    }

    fn fetch_cell(&mut self, container: &ContainerRef, key: &Number) -> EvalResult<Option<Value>> {
        match self.lookup(container, key)? {
            Some(cell) => {
                let value = cell.value();
                self.eval_safe(&value)
                    .map(Some)
                    .map_err(|e| e.with_span(cell.span()))
            }
            None => Ok(None),
        }
    }

    /// Drain the input stream into a fresh container. Never cached.
    fn read_input(&mut self) -> EvalResult {
        let text = self
            .memory
            .io()
            .read_all()
            .map_err(|e| io_failure(&e))?;
        Ok(Value::Container(from_string(&text)))
    }

    fn write_output(&mut self, value: Value) -> EvalResult<()> {
        let target = match value {
            Value::Container(container) => Target::Container(container),
            Value::Memory => Target::Memory,
            other => return Err(io_channel_type(&other)),
        };
        let text = self.target_text(&target)?;
        self.memory.io().write(&text).map_err(|e| io_failure(&e))
    }
}
