//! Scanner errors.
//!
//! Scanning never stops at an error: each problem is recorded with its line
//! and the scanner carries on with the next character.

use lox_diagnostic::{Diagnostic, ErrorCode};

/// What went wrong while scanning.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanErrorKind {
    /// Input ended before the closing `"`.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// Input ended with at least one `/*` still open.
    #[error("Unterminated comment.")]
    UnterminatedComment,
    /// A character that starts no token.
    #[error("Unrecognized character: '{0}'.")]
    UnrecognizedCharacter(char),
}

impl ScanErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ScanErrorKind::UnterminatedString => ErrorCode::E0001,
            ScanErrorKind::UnrecognizedCharacter(_) => ErrorCode::E0002,
            ScanErrorKind::UnterminatedComment => ErrorCode::E0003,
        }
    }
}

/// A scanner error and the line it was reported at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: u32,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: u32) -> Self {
        ScanError { kind, line }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.error_code(), self.line).with_message(self.kind.to_string())
    }
}

impl From<&ScanError> for Diagnostic {
    fn from(error: &ScanError) -> Self {
        error.to_diagnostic()
    }
}
