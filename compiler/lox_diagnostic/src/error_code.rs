use std::fmt;

/// Pipeline phase a diagnostic comes from.
///
/// Callers use the phase to pick a process exit status: scan and parse
/// failures are "bad input" (65), runtime failures are "software error" (70).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Scan,
    Parse,
    Runtime,
}

impl Phase {
    /// Scan and parse problems are both syntax errors.
    pub fn is_syntax(self) -> bool {
        matches!(self, Phase::Scan | Phase::Parse)
    }
}

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Scanner errors
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unrecognized character in source
    E0002,
    /// Unterminated block comment
    E0003,

    // Parser Errors (E1xxx)
    /// Expected expression
    E1001,
    /// Binary operator with no left operand
    E1002,
    /// Missing required token (`)`, `:`, `;`, variable name)
    E1003,

    // Runtime Errors (E2xxx)
    /// Unary operand must be a number
    E2001,
    /// Binary operands must be numbers
    E2002,
    /// `+` operands must be numbers or strings
    E2003,
    /// Division by zero
    E2004,
    /// Undefined variable
    E2005,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            // Runtime
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 => Phase::Scan,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 => Phase::Parse,
            ErrorCode::E2001
            | ErrorCode::E2002
            | ErrorCode::E2003
            | ErrorCode::E2004
            | ErrorCode::E2005 => Phase::Runtime,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
