//! Runtime values.

use std::fmt;

use lox_ir::{format_number, LiteralValue};

/// A Lox runtime value.
///
/// A variable declared without an initializer holds `Nil`; there is no
/// separate "uninitialized" state.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    #[default]
    Nil,
}

impl Value {
    /// Only `nil` and `false` are falsey; `0` and `""` are truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::Str(s) => Value::Str(s.clone()),
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Nil => Value::Nil,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

/// The stringify rule used by `print`: numbers drop a trailing `.0`,
/// strings print without quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
        }
    }
}
