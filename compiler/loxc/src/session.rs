//! One interpreter session: the scan → parse → execute pipeline.
//!
//! A `Session` owns a single [`Interpreter`], so variables defined by one
//! run are visible to the next. Diagnostics from every phase go to the
//! session's emitter; token dumps, printed trees and `print` output go to
//! the interpreter's print handler.

use std::io;

use tracing::debug;

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::Diagnostic;
use lox_eval::{Interpreter, RuntimeError, SharedPrintHandler};
use lox_ir::{Expr, Program};
use lox_lexer::ScanOutput;
use lox_parse::{Parser, RecoveryMode};

/// How far a run goes through the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    /// Print one line per token.
    Scan,
    /// Print the parsed tree.
    Parse,
    /// Run the program.
    #[default]
    Execute,
}

/// Notation used when a single expression is printed in parse mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreeNotation {
    #[default]
    SExpr,
    /// Reverse Polish notation. Statements always print as S-expressions.
    Rpn,
}

/// Configuration for a [`Session`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub stage: Stage,
    pub recovery: RecoveryMode,
    /// Treat the source as one bare expression instead of a statement list.
    pub expression: bool,
    pub notation: TreeNotation,
}

impl RunConfig {
    pub fn new(stage: Stage) -> Self {
        RunConfig {
            stage,
            ..RunConfig::default()
        }
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: RecoveryMode) -> Self {
        self.recovery = recovery;
        self
    }

    #[must_use]
    pub fn with_expression(mut self, expression: bool) -> Self {
        self.expression = expression;
        self
    }

    #[must_use]
    pub fn with_notation(mut self, notation: TreeNotation) -> Self {
        self.notation = notation;
        self
    }
}

/// What happened during one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOutcome {
    /// Scan and parse errors reported.
    pub syntax_errors: usize,
    pub runtime_error: Option<RuntimeError>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.syntax_errors == 0 && self.runtime_error.is_none()
    }

    /// Process exit code: `65` for scan/parse failure, `70` for a runtime
    /// failure, `0` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.syntax_errors > 0 {
            65
        } else if self.runtime_error.is_some() {
            70
        } else {
            0
        }
    }

    fn syntax(count: usize) -> Self {
        RunOutcome {
            syntax_errors: count,
            runtime_error: None,
        }
    }

    fn runtime(result: Result<(), RuntimeError>) -> Self {
        RunOutcome {
            syntax_errors: 0,
            runtime_error: result.err(),
        }
    }
}

/// A long-lived pipeline driver over one interpreter.
pub struct Session<E: DiagnosticEmitter = TerminalEmitter<io::Stderr>> {
    config: RunConfig,
    interpreter: Interpreter,
    emitter: E,
}

impl Session {
    /// A session printing to stdout and reporting to stderr.
    pub fn stdio(config: RunConfig) -> Self {
        Session::new(config, Interpreter::new(), TerminalEmitter::stderr(ColorMode::Auto))
    }
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(config: RunConfig, interpreter: Interpreter, emitter: E) -> Self {
        Session {
            config,
            interpreter,
            emitter,
        }
    }

    /// A session whose output goes to `print_handler`.
    pub fn with_print_handler(config: RunConfig, print_handler: SharedPrintHandler, emitter: E) -> Self {
        let interpreter = Interpreter::builder().print_handler(print_handler).build();
        Session::new(config, interpreter, emitter)
    }

    pub fn config(&self) -> RunConfig {
        self.config
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Run `source` through the configured stages.
    #[tracing::instrument(level = "debug", skip_all, fields(stage = ?self.config.stage))]
    pub fn run(&mut self, source: &str) -> RunOutcome {
        let scanned = self.scan(source);

        if self.config.stage == Stage::Scan {
            for token in &scanned.tokens {
                self.println(&token.to_string());
            }
            return RunOutcome::syntax(scanned.errors.len());
        }

        if self.config.expression {
            self.run_expression(&scanned)
        } else {
            self.run_program(&scanned)
        }
    }

    /// Run one line of interactive input.
    ///
    /// A line that is a complete bare expression (`1 + 2`, no `;`) is
    /// evaluated and its value printed; anything else runs as statements.
    pub fn run_line(&mut self, line: &str) -> RunOutcome {
        if self.config.stage != Stage::Execute || self.config.expression {
            return self.run(line);
        }

        let scanned = self.scan(line);
        if !scanned.has_errors() {
            if let Ok(expr) = lox_parse::parse_expression(&scanned.tokens) {
                debug!("line is a bare expression");
                return self.evaluate_and_print(&expr);
            }
        }
        self.run_program(&scanned)
    }

    fn scan(&mut self, source: &str) -> ScanOutput {
        let scanned = lox_lexer::scan(source);
        self.emitter.emit_all(&scanned.diagnostics());
        self.emitter.flush();
        scanned
    }

    fn run_program(&mut self, scanned: &ScanOutput) -> RunOutcome {
        let parsed = Parser::new(&scanned.tokens)
            .with_recovery(self.config.recovery)
            .parse_program();
        let syntax_errors = scanned.errors.len() + parsed.errors.len();
        self.report(&parsed.diagnostics());

        if syntax_errors > 0 {
            return RunOutcome::syntax(syntax_errors);
        }

        match self.config.stage {
            Stage::Parse => {
                self.print_program(&parsed.program);
                RunOutcome::default()
            }
            Stage::Scan | Stage::Execute => self.interpret(&parsed.program),
        }
    }

    fn run_expression(&mut self, scanned: &ScanOutput) -> RunOutcome {
        let expr = match lox_parse::parse_expression(&scanned.tokens) {
            Ok(expr) if !scanned.has_errors() => expr,
            Ok(_) => return RunOutcome::syntax(scanned.errors.len()),
            Err(error) => {
                self.report(&[error.to_diagnostic()]);
                return RunOutcome::syntax(scanned.errors.len() + 1);
            }
        };

        match self.config.stage {
            Stage::Parse => {
                let printed = match self.config.notation {
                    TreeNotation::SExpr => lox_fmt::print_expr(&expr),
                    TreeNotation::Rpn => lox_fmt::print_rpn(&expr),
                };
                self.println(&printed);
                RunOutcome::default()
            }
            Stage::Scan | Stage::Execute => self.evaluate_and_print(&expr),
        }
    }

    fn print_program(&self, program: &Program) {
        for stmt in program {
            self.println(&lox_fmt::print_stmt(stmt));
        }
    }

    fn interpret(&mut self, program: &Program) -> RunOutcome {
        let result = self.interpreter.interpret(program);
        if let Err(error) = &result {
            self.report(&[error.to_diagnostic()]);
        }
        RunOutcome::runtime(result)
    }

    fn evaluate_and_print(&mut self, expr: &Expr) -> RunOutcome {
        let result = self
            .interpreter
            .evaluate(expr)
            .map(|value| self.println(&value.to_string()));
        if let Err(error) = &result {
            self.report(&[error.to_diagnostic()]);
        }
        RunOutcome::runtime(result)
    }

    fn report(&mut self, diagnostics: &[Diagnostic]) {
        if diagnostics.is_empty() {
            return;
        }
        self.emitter.emit_all(diagnostics);
        self.emitter.flush();
    }

    fn println(&self, line: &str) {
        self.interpreter.print_handler().println(line);
    }
}

#[cfg(test)]
mod tests;
