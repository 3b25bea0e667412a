use std::fmt;

use lox_ir::Token;

use crate::error_code::Phase;
use crate::ErrorCode;

/// Where on a line an error points.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Location {
    /// No token to point at (scanner errors).
    #[default]
    None,
    /// The error was found at end of input.
    AtEnd,
    /// The error was found at a token with this lexeme.
    AtLexeme(String),
}

impl Location {
    /// Location of a token: `AtEnd` for EOF, otherwise its lexeme.
    pub fn of(token: &Token) -> Self {
        if token.is_eof() {
            Location::AtEnd
        } else {
            Location::AtLexeme(token.lexeme.clone())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::None => Ok(()),
            Location::AtEnd => f.write_str(" at end"),
            Location::AtLexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A reportable error with everything the sink needs to print it.
///
/// Every phase renders through the same format:
/// `[line <n>] Error<location>: <message>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// 1-based source line.
    pub line: u32,
    pub location: Location,
    /// Main error message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new error diagnostic with no location and an empty message.
    pub fn error(code: ErrorCode, line: u32) -> Self {
        Diagnostic {
            code,
            line,
            location: Location::None,
            message: String::new(),
        }
    }

    /// Create an error pointing at `token`.
    pub fn at_token(code: ErrorCode, token: &Token) -> Self {
        Self::error(code, token.line).with_location(Location::of(token))
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn phase(&self) -> Phase {
        self.code.phase()
    }

    /// Check if this came from the scanner or the parser.
    pub fn is_syntax_error(&self) -> bool {
        self.phase().is_syntax()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
    }
}
