//! Terminal Emitter
//!
//! One line per diagnostic, with optional ANSI color on the `Error` word.

use std::io::{self, Write};

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter writing `[line <n>] Error<location>: <message>` lines.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    emitted: usize,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            emitted: 0,
        }
    }

    /// Create an emitter that never colors its output.
    pub fn plain(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::Never, false)
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        if self.colors {
            writeln!(
                self.writer,
                "[line {}] {}Error{}{}: {}",
                diagnostic.line,
                colors::ERROR,
                colors::RESET,
                diagnostic.location,
                diagnostic.message
            )
        } else {
            writeln!(self.writer, "{diagnostic}")
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter on stderr, colored when stderr is a terminal.
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // A failed write to the error stream has nowhere better to go.
        let _ = self.write_diagnostic(diagnostic);
        self.emitted += 1;
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn error_count(&self) -> usize {
        self.emitted
    }
}
