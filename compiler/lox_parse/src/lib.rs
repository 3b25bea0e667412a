//! Recursive descent parser for Lox.
//!
//! One method per grammar rule, each calling the next-higher precedence
//! rule. Binary levels fold left; the comma and ternary operators recurse
//! to the right.
//!
//! # Module Structure
//!
//! - `cursor.rs`: Token navigation
//! - `error.rs`: `ParseError` and its diagnostic conversion
//! - `recovery.rs`: `RecoveryMode` and statement-boundary synchronization
//! - `grammar/`: Statement and expression rules

mod cursor;
mod error;
mod grammar;
mod recovery;

use lox_diagnostic::Diagnostic;
use lox_ir::{Expr, Program, Token};
use tracing::trace;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use recovery::{synchronize, RecoveryMode, TokenSet, STMT_START};

/// Result of parsing a whole program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    /// Statements that parsed successfully, in source order.
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    recovery: RecoveryMode,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a token stream ending in `EOF`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            recovery: RecoveryMode::default(),
        }
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: RecoveryMode) -> Self {
        self.recovery = recovery;
        self
    }

    /// Parse `statement* EOF`.
    ///
    /// With `RecoveryMode::Abort` parsing ends at the first failed
    /// statement; with `Synchronize` it skips to the next statement boundary
    /// and carries on.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut output = ParseOutput::default();

        while !self.cursor.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => output.program.push(stmt),
                Err(error) => {
                    output.errors.push(error);
                    if self.recovery == RecoveryMode::Abort {
                        break;
                    }
                    let resumed_at = self.cursor.position();
                    synchronize(&mut self.cursor);
                    trace!(
                        from = resumed_at,
                        to = self.cursor.position(),
                        "synchronized after parse error"
                    );
                }
            }
        }

        output
    }

    /// Parse a single expression that must span the whole input.
    pub fn parse_expression(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if self.cursor.is_at_end() {
            Ok(expr)
        } else {
            Err(ParseError::new(
                ParseErrorKind::MissingToken {
                    expected: lox_ir::TokenKind::Eof,
                    message: "Expect end of expression.",
                },
                self.cursor.current().clone(),
            ))
        }
    }
}

/// Parse a program, stopping at the first error.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Parse a lone expression (the expression-only entry point).
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_expression()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
