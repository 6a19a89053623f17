//! I/O handler behind the memory's I/O channel.
//!
//! Reading the channel drains the whole remaining input; writing it emits a
//! string and flushes. The CLI uses [`StdioHandler`]; tests and embedders use
//! [`BufferIoHandler`] to feed input and capture output.
//!
//! Enum dispatch, like the rest of the evaluator's pluggable pieces.

use std::io::{self, Read, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Reads stdin and writes stdout.
#[derive(Default)]
pub struct StdioHandler;

impl StdioHandler {
    /// Block until stdin is exhausted. Invalid UTF-8 is replaced.
    pub fn read_all(&self) -> io::Result<String> {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn write(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// In-memory input and captured output.
#[derive(Default)]
pub struct BufferIoHandler {
    input: Mutex<String>,
    output: Mutex<String>,
}

impl BufferIoHandler {
    pub fn new(input: impl Into<String>) -> Self {
        BufferIoHandler {
            input: Mutex::new(input.into()),
            output: Mutex::new(String::new()),
        }
    }

    /// Take all remaining input. Later reads see an empty stream.
    pub fn read_all(&self) -> String {
        std::mem::take(&mut *self.input.lock())
    }

    pub fn write(&self, text: &str) {
        self.output.lock().push_str(text);
    }

    pub fn output(&self) -> String {
        self.output.lock().clone()
    }
}

pub enum IoHandlerImpl {
    Stdio(StdioHandler),
    Buffer(BufferIoHandler),
}

impl IoHandlerImpl {
    pub fn read_all(&self) -> io::Result<String> {
        match self {
            Self::Stdio(h) => h.read_all(),
            Self::Buffer(h) => Ok(h.read_all()),
        }
    }

    pub fn write(&self, text: &str) -> io::Result<()> {
        match self {
            Self::Stdio(h) => h.write(text),
            Self::Buffer(h) => {
                h.write(text);
                Ok(())
            }
        }
    }

    /// Captured output. Empty for stdio, which does not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Stdio(_) => String::new(),
            Self::Buffer(h) => h.output(),
        }
    }
}

/// Shared handle to an I/O handler.
pub type SharedIoHandler = Arc<IoHandlerImpl>;

pub fn stdio_handler() -> SharedIoHandler {
    Arc::new(IoHandlerImpl::Stdio(StdioHandler))
}

/// Handler reading from `input` and capturing everything written.
pub fn buffer_handler(input: impl Into<String>) -> SharedIoHandler {
    Arc::new(IoHandlerImpl::Buffer(BufferIoHandler::new(input)))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]
mod tests {
    use super::*;

    #[test]
    fn buffer_input_is_drained_once() {
        let handler = buffer_handler("abc");
        assert_eq!(handler.read_all().unwrap(), "abc");
        assert_eq!(handler.read_all().unwrap(), "");
    }

    #[test]
    fn buffer_output_accumulates() {
        let handler = buffer_handler("");
        handler.write("Hello, ").unwrap();
        handler.write("world").unwrap();
        assert_eq!(handler.output(), "Hello, world");
    }

    #[test]
    fn stdio_does_not_capture() {
        assert_eq!(stdio_handler().output(), "");
    }
}
