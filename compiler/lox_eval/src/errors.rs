//! Runtime errors.
//!
//! Every error carries the token it is reported at: the operator for type
//! and arithmetic errors, the name for undefined variables.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Token;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("Operand must be a number.")]
    OperandNotNumber { operator: Token },

    #[error("Operands must be numbers.")]
    OperandsNotNumbers { operator: Token },

    #[error("Operands must be numbers or strings.")]
    OperandsNotNumbersNorStrings { operator: Token },

    #[error("Division by zero.")]
    DivisionByZero { operator: Token },

    #[error("Undefined variable '{lexeme}'.", lexeme = .name.lexeme)]
    UndefinedVariable { name: Token },
}

pub type EvalResult<T> = Result<T, RuntimeError>;

impl RuntimeError {
    /// The token the error points at.
    pub fn token(&self) -> &Token {
        match self {
            RuntimeError::OperandNotNumber { operator }
            | RuntimeError::OperandsNotNumbers { operator }
            | RuntimeError::OperandsNotNumbersNorStrings { operator }
            | RuntimeError::DivisionByZero { operator } => operator,
            RuntimeError::UndefinedVariable { name } => name,
        }
    }

    pub fn line(&self) -> u32 {
        self.token().line
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            RuntimeError::OperandNotNumber { .. } => ErrorCode::E2001,
            RuntimeError::OperandsNotNumbers { .. } => ErrorCode::E2002,
            RuntimeError::OperandsNotNumbersNorStrings { .. } => ErrorCode::E2003,
            RuntimeError::DivisionByZero { .. } => ErrorCode::E2004,
            RuntimeError::UndefinedVariable { .. } => ErrorCode::E2005,
        }
    }

    /// Convert to a diagnostic in the standard `[line N] Error at ...` form.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_token(self.error_code(), self.token()).with_message(self.to_string())
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(error: &RuntimeError) -> Self {
        error.to_diagnostic()
    }
}

// Constructors

pub fn operand_not_number(operator: &Token) -> RuntimeError {
    RuntimeError::OperandNotNumber {
        operator: operator.clone(),
    }
}

pub fn operands_not_numbers(operator: &Token) -> RuntimeError {
    RuntimeError::OperandsNotNumbers {
        operator: operator.clone(),
    }
}

pub fn operands_not_numbers_nor_strings(operator: &Token) -> RuntimeError {
    RuntimeError::OperandsNotNumbersNorStrings {
        operator: operator.clone(),
    }
}

pub fn division_by_zero(operator: &Token) -> RuntimeError {
    RuntimeError::DivisionByZero {
        operator: operator.clone(),
    }
}

pub fn undefined_variable(name: &Token) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.clone() }
}
