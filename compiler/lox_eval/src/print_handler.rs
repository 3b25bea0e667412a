//! Print handler for configurable output.
//!
//! `print` statements go through a handler so output can be directed to
//! different destinations:
//! - stdout (default)
//! - a buffer, for tests and embedding
//!
//! Uses enum dispatch instead of trait objects; the set of destinations is
//! fixed.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut out = io::stdout().lock();
        // A closed stdout (e.g. `lox run x | head`) is not an interpreter error.
        let _ = writeln!(out, "{msg}");
    }
}

/// Print handler that captures output to a buffer.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for stdout, which captures nothing.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
