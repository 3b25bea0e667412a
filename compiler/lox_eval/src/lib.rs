//! Lox Eval - tree-walking evaluator for Lox programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: one flat table of global bindings, owned by the interpreter
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `PrintHandlerImpl`: where `print` output goes (stdout, buffer, nowhere)

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{EvalResult, RuntimeError};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;
