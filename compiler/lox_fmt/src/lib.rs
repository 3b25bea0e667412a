//! Lox tree printers.
//!
//! Debug renderings of parsed code:
//! - [`print_expr`] / [`print_stmt`] / [`print_program`]: fully
//!   parenthesized S-expressions (`(* (- 123) (group 45.67))`), the output
//!   of parse-only mode
//! - [`print_rpn`]: reverse Polish notation (`1 2 + 4 3 - *`)
//!
//! Both printers show precedence explicitly, so they double as the
//! regression oracle for the parser.

mod rpn;
mod sexpr;

use lox_ir::{format_number, LiteralValue};

pub use rpn::{print_rpn, RpnPrinter};
pub use sexpr::{print_expr, print_program, print_stmt, SExprPrinter};

/// Text of a literal inside a printed tree.
///
/// Booleans print numerically (`true` is `1`).
pub(crate) fn literal_text(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::Str(s) => s.clone(),
        LiteralValue::Bool(b) => u8::from(*b).to_string(),
        LiteralValue::Nil => "nil".to_owned(),
    }
}
