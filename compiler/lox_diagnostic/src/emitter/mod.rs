//! Diagnostic Emitters
//!
//! The emitter is the sink every phase reports into. It decides nothing;
//! it only formats and writes. Each emitter implements `DiagnosticEmitter`.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Number of diagnostics emitted so far.
    fn error_count(&self) -> usize;
}
