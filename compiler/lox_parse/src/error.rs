//! Parse error types.
//!
//! A `ParseError` keeps the token it was found at; the diagnostic location
//! (`at end` or `at '<lexeme>'`) is derived from that token.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Token, TokenKind};

/// What the parser expected and did not find.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A token that cannot start an expression.
    #[error("Expected expression.")]
    ExpectedExpression,
    /// A binary operator where its left operand should have been.
    #[error("Missing left hand term for operator.")]
    MissingLeftOperand,
    /// A required token such as `)` or `;`.
    #[error("{message}")]
    MissingToken {
        expected: TokenKind,
        message: &'static str,
    },
}

impl ParseErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::ExpectedExpression => ErrorCode::E1001,
            ParseErrorKind::MissingLeftOperand => ErrorCode::E1002,
            ParseErrorKind::MissingToken { .. } => ErrorCode::E1003,
        }
    }
}

/// Parse error with the token it points at.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub token: Token,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, token: Token) -> Self {
        ParseError { kind, token }
    }

    pub fn expected_expression(token: &Token) -> Self {
        Self::new(ParseErrorKind::ExpectedExpression, token.clone())
    }

    pub fn missing_left_operand(operator: &Token) -> Self {
        Self::new(ParseErrorKind::MissingLeftOperand, operator.clone())
    }

    /// Line of the offending token.
    pub fn line(&self) -> u32 {
        self.token.line
    }

    /// Convert to a diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_token(self.kind.error_code(), &self.token).with_message(self.kind.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_diagnostic(), f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        error.to_diagnostic()
    }
}
