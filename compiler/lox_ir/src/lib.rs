//! Lox IR - tokens and syntax tree types.
//!
//! This crate contains the data shared by every stage of the interpreter:
//! - `Token` / `TokenKind` / `Literal` for scanner output
//! - `Expr` / `Stmt` / `Program` for parser output
//! - `format_number`, the single number-to-text rule used by the token
//!   dump, the tree printers and the runtime

pub mod ast;
mod token;

pub use ast::{BinaryOp, Expr, LiteralValue, Program, Stmt, UnaryOp};
pub use token::{keyword, Literal, Token, TokenKind};

/// Format a number the way Lox shows it.
///
/// Integral values drop the fractional part (`5.0` prints as `5`); every
/// other value uses the shortest representation that round-trips.
pub fn format_number(n: f64) -> String {
    // `f64`'s Display already omits a trailing `.0` and never uses
    // exponent notation.
    n.to_string()
}
