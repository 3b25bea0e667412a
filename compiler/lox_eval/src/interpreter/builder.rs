//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Unset parts fall back to an empty environment and the stdout handler.
#[derive(Default)]
pub struct InterpreterBuilder {
    environment: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the print handler used by `print` statements.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            environment: self.environment.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
