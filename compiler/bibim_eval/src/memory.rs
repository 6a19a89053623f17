//! Addressable memory (the `@` literal).
//!
//! Memory behaves like a container with two reserved keys. Key `0` is the
//! position register: readable, but written only by the scheduler. Key `1`
//! is the I/O channel. Every other key lives in ordinary cell storage.

use bibim_ir::{ContainerRef, Number};

use crate::SharedIoHandler;

/// Key of the position register.
pub const POSITION_KEY: i64 = 0;

/// Key of the I/O channel.
pub const IO_KEY: i64 = 1;

/// Reserved slot a key addresses, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ReservedKey {
    Position,
    Io,
}

impl ReservedKey {
    pub(crate) fn of(key: &Number) -> Option<Self> {
        if *key == Number::integer(POSITION_KEY) {
            Some(Self::Position)
        } else if *key == Number::integer(IO_KEY) {
            Some(Self::Io)
        } else {
            None
        }
    }
}

pub struct Memory {
    storage: ContainerRef,
    position: Option<Number>,
    io: SharedIoHandler,
}

impl Memory {
    pub fn new(io: SharedIoHandler) -> Self {
        Memory {
            storage: ContainerRef::default(),
            position: None,
            io,
        }
    }

    /// Key of the most recently executed cell, `None` before the first step.
    pub fn position(&self) -> Option<&Number> {
        self.position.as_ref()
    }

    pub(crate) fn set_position(&mut self, key: Number) {
        self.position = Some(key);
    }

    pub(crate) fn reset_position(&mut self) {
        self.position = None;
    }

    /// Cells for non-reserved keys.
    pub fn storage(&self) -> &ContainerRef {
        &self.storage
    }

    pub fn io(&self) -> &SharedIoHandler {
        &self.io
    }
}
