//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the value set is closed, so each operator
//! pattern-matches on the operand pair.

use lox_ir::{format_number, BinaryOp, Token};

use crate::errors::{
    division_by_zero, operands_not_numbers, operands_not_numbers_nor_strings, EvalResult,
};
use crate::Value;

/// Evaluate a binary operation. `operator` is only used for error reports.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp, operator: &Token) -> EvalResult<Value> {
    let value = match op {
        BinaryOp::Equal => Value::Bool(left == right),
        BinaryOp::NotEqual => Value::Bool(left != right),
        BinaryOp::Add => return eval_add(left, right, operator),
        BinaryOp::Sub => {
            let (a, b) = numbers(&left, &right, operator)?;
            Value::Number(a - b)
        }
        BinaryOp::Mul => {
            let (a, b) = numbers(&left, &right, operator)?;
            Value::Number(a * b)
        }
        BinaryOp::Div => {
            let (a, b) = numbers(&left, &right, operator)?;
            if b == 0.0 {
                return Err(division_by_zero(operator));
            }
            Value::Number(a / b)
        }
        BinaryOp::Greater => {
            let (a, b) = numbers(&left, &right, operator)?;
            Value::Bool(a > b)
        }
        BinaryOp::GreaterEqual => {
            let (a, b) = numbers(&left, &right, operator)?;
            Value::Bool(a >= b)
        }
        BinaryOp::Less => {
            let (a, b) = numbers(&left, &right, operator)?;
            Value::Bool(a < b)
        }
        BinaryOp::LessEqual => {
            let (a, b) = numbers(&left, &right, operator)?;
            Value::Bool(a <= b)
        }
    };
    Ok(value)
}

/// Both operands of an arithmetic or comparison operator, which must be numbers.
fn numbers(left: &Value, right: &Value, operator: &Token) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_not_numbers(operator)),
    }
}

/// `+` adds numbers, concatenates strings, and stringifies a number paired
/// with a string (keeping operand order).
fn eval_add(left: Value, right: Value, operator: &Token) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (Value::Str(mut a), Value::Number(b)) => {
            a.push_str(&format_number(b));
            Ok(Value::Str(a))
        }
        (Value::Number(a), Value::Str(b)) => {
            let mut text = format_number(a);
            text.push_str(&b);
            Ok(Value::Str(text))
        }
        _ => Err(operands_not_numbers_nor_strings(operator)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::RuntimeError;
    use lox_ir::TokenKind;
    use pretty_assertions::assert_eq;

    fn op_token(op: BinaryOp) -> Token {
        Token::simple(TokenKind::Plus, op.as_symbol(), 1)
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn eval(left: Value, op: BinaryOp, right: Value) -> EvalResult<Value> {
        evaluate_binary(left, right, op, &op_token(op))
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval(num(3.0), BinaryOp::Add, num(2.0)), Ok(Value::Number(5.0)));
        assert_eq!(eval(num(3.0), BinaryOp::Sub, num(5.0)), Ok(Value::Number(-2.0)));
        assert_eq!(eval(num(1.5), BinaryOp::Mul, num(4.0)), Ok(Value::Number(6.0)));
        assert_eq!(eval(num(1.0), BinaryOp::Div, num(4.0)), Ok(Value::Number(0.25)));
    }

    #[test]
    fn test_comparison() {
        assert_eq!(eval(num(1.0), BinaryOp::Less, num(2.0)), Ok(Value::Bool(true)));
        assert_eq!(eval(num(2.0), BinaryOp::LessEqual, num(2.0)), Ok(Value::Bool(true)));
        assert_eq!(eval(num(2.0), BinaryOp::Greater, num(2.0)), Ok(Value::Bool(false)));
        assert_eq!(eval(num(3.0), BinaryOp::GreaterEqual, num(2.0)), Ok(Value::Bool(true)));
    }

    #[test]
    fn test_string_concatenation_keeps_order() {
        assert_eq!(eval("ab".into(), BinaryOp::Add, "cd".into()), Ok(Value::from("abcd")));
        assert_eq!(eval(num(23.3), BinaryOp::Add, "ab".into()), Ok(Value::from("23.3ab")));
        assert_eq!(eval("ab".into(), BinaryOp::Add, num(23.3)), Ok(Value::from("ab23.3")));
        assert_eq!(eval("n".into(), BinaryOp::Add, num(2.0)), Ok(Value::from("n2")));
    }

    #[test]
    fn test_add_rejects_other_types() {
        let err = eval(true.into(), BinaryOp::Add, num(1.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsNotNumbersNorStrings { .. }));
        let err = eval("a".into(), BinaryOp::Add, Value::Nil).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsNotNumbersNorStrings { .. }));
    }

    #[test]
    fn test_arithmetic_requires_numbers() {
        let err = eval("a".into(), BinaryOp::Sub, num(1.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsNotNumbers { .. }));
        let err = eval("a".into(), BinaryOp::Less, "b".into()).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsNotNumbers { .. }));
        let err = eval(num(1.0), BinaryOp::Div, Value::Nil).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsNotNumbers { .. }));
        let err = eval(true.into(), BinaryOp::GreaterEqual, num(0.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::OperandsNotNumbers { .. }));
    }

    #[test]
    fn test_division_by_zero() {
        let err = eval(num(3.0), BinaryOp::Div, num(0.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
        assert_eq!(err.line(), 1);
        let err = eval(num(3.0), BinaryOp::Div, num(-0.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    }

    #[test]
    fn test_equality_never_errors() {
        assert_eq!(eval(Value::Nil, BinaryOp::Equal, Value::Nil), Ok(Value::Bool(true)));
        assert_eq!(eval(Value::Nil, BinaryOp::Equal, false.into()), Ok(Value::Bool(false)));
        assert_eq!(eval(num(1.0), BinaryOp::NotEqual, "1".into()), Ok(Value::Bool(true)));
        assert_eq!(eval("x".into(), BinaryOp::Equal, "x".into()), Ok(Value::Bool(true)));
    }
}
