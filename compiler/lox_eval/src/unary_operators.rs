//! Unary operator implementations for the evaluator.

use lox_ir::{Token, UnaryOp};

use crate::errors::{operand_not_number, EvalResult};
use crate::Value;

/// Evaluate a unary operation using direct pattern matching.
///
/// `!` works on any value through truthiness; `-` needs a number.
pub fn evaluate_unary(value: Value, op: UnaryOp, operator: &Token) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOp::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Negate, _) => Err(operand_not_number(operator)),
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
    }
}
