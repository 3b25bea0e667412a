//! The global variable table.
//!
//! One flat scope per interpreter. The caller constructs it and hands it
//! to the interpreter, so independent interpreters never share bindings.

use rustc_hash::FxHashMap;

use lox_ir::Token;

use crate::errors::{undefined_variable, EvalResult};
use crate::Value;

#[derive(Clone, Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, overwriting any earlier binding of the same name.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Look up the variable named by `name`.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.lookup(&name.lexeme)
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
