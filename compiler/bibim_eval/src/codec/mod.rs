//! Text conversion.
//!
//! A string is a container whose keys `0, 1, 2, ...` hold Unicode code
//! points. Decoding walks those keys until the first missing one.

use bibim_ir::{Cell, ContainerRef, Expr, Number, Value};

use crate::errors::{codec_error, EvalResult};
use crate::interpreter::{Interpreter, Target};

/// Build a fresh container holding the code points of `text`.
pub fn from_string(text: &str) -> ContainerRef {
    ContainerRef::from_cells((0i64..).zip(text.chars()).map(|(index, ch)| {
        Cell::new(Expr::integer(index), Expr::integer(i64::from(u32::from(ch))))
    }))
}

impl Interpreter {
    /// Decode a container as text.
    ///
    /// Every value up to the first missing key must be an integer that is a
    /// Unicode scalar value; anything else is a codec error in every mode.
    pub fn container_text(&mut self, container: &ContainerRef) -> EvalResult<String> {
        self.target_text(&Target::Container(container.clone()))
    }

    pub(crate) fn target_text(&mut self, target: &Target) -> EvalResult<String> {
        let mut text = String::new();
        for index in 0i64.. {
            let key = Number::integer(index);
            let Some(value) = self.fetch(target, &key)? else {
                break;
            };
            let ch = match &value {
                Value::Number(n) => n
                    .to_char()
                    .ok_or_else(|| codec_error(format!("{n} at key {key} is not a character")))?,
                other => {
                    return Err(codec_error(format!(
                        "{} at key {key} is not a character",
                        other.type_name()
                    )))
                }
            };
            text.push(ch);
        }
        Ok(text)
    }
}
