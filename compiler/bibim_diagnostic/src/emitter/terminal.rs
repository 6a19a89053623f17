//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Report, ReportKind, Source};
use bibim_ir::Span;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for the plain (snippet-less) format.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

struct SourceFile {
    name: String,
    text: String,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text that diagnostic spans point into.
    ///
    /// Diagnostics with a primary span are then rendered as annotated
    /// snippets.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.source = Some(SourceFile {
            name: name.into(),
            text: text.into(),
        });
        self
    }

    /// Recover the writer (used by tests to inspect buffered output).
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn emit_plain(&mut self, diagnostic: &Diagnostic) {
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&diagnostic.severity.to_string(), color);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = writeln!(self.writer, "  {marker} {}: {}", label.span, label.message);
        }
        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn emit_snippet(&mut self, diagnostic: &Diagnostic, source: &SourceFile, primary: Span) {
        let kind = match diagnostic.severity {
            Severity::Error => ReportKind::Error,
            Severity::Note => ReportKind::Advice,
        };
        let offset = char_range(&source.text, primary).start;
        let mut report = Report::build(kind, source.name.clone(), offset)
            .with_code(diagnostic.code)
            .with_message(&diagnostic.message)
            .with_config(Config::default().with_color(self.colors));

        for label in &diagnostic.labels {
            let color = if label.is_primary {
                Color::Red
            } else {
                Color::Blue
            };
            report = report.with_label(
                ariadne::Label::new((source.name.clone(), char_range(&source.text, label.span)))
                    .with_message(&label.message)
                    .with_color(color),
            );
        }
        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }

        let cache = (source.name.clone(), Source::from(source.text.clone()));
        let _ = report.finish().write(cache, &mut self.writer);
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let source = self.source.take();
        match (&source, diagnostic.primary_span()) {
            (Some(file), Some(span)) if !file.text.is_empty() => {
                self.emit_snippet(diagnostic, file, span);
            }
            _ => self.emit_plain(diagnostic),
        }
        self.source = source;
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Convert a byte span into the char offsets ariadne expects.
///
/// The result is clamped to the text and never empty, so end-of-input
/// spans still point at the last character.
pub(super) fn char_range(text: &str, span: Span) -> Range<usize> {
    let total = text.chars().count();
    let to_chars = |byte: usize| text.char_indices().take_while(|(i, _)| *i < byte).count();
    let bytes = span.to_range();
    let start = to_chars(bytes.start).min(total.saturating_sub(1));
    let end = to_chars(bytes.end).clamp(start + 1, total.max(start + 1));
    start..end
}
