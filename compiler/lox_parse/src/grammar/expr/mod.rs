//! Expression parsing.
//!
//! This module extends Parser with methods for parsing expressions, from
//! the comma operator down to unary operators.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`) and the precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals, grouping, variables, error productions

mod operators;
mod primary;

use lox_ir::{Expr, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

use operators::{COMPARISON_OPS, EQUALITY_OPS, FACTOR_OPS, TERM_OPS};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_sequence())
    }

    /// exprSequence → conditional ( "," exprSequence )?
    fn parse_sequence(&mut self) -> Result<Expr, ParseError> {
        let head = self.parse_conditional()?;

        if self.cursor.match_any(&[TokenKind::Comma]).is_some() {
            let tail = self.parse_expr()?;
            return Ok(Expr::sequence(head, tail));
        }

        Ok(head)
    }

    /// conditional → equality ( "?" expression ":" conditional )?
    fn parse_conditional(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_equality()?;

        if self.cursor.match_any(&[TokenKind::Question]).is_some() {
            let then_branch = self.parse_expr()?;
            self.cursor.consume(
                TokenKind::Colon,
                "Expect ':' after then branch of conditional expression.",
            )?;
            let else_branch = ensure_sufficient_stack(|| self.parse_conditional())?;
            return Ok(Expr::ternary(condition, then_branch, else_branch));
        }

        Ok(condition)
    }

    /// equality → comparison ( ("!=" | "==") comparison )*
    pub(super) fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparison()?;

        while let Some((op, token)) = self.match_binary_op(EQUALITY_OPS) {
            let right = self.parse_comparison()?;
            left = Expr::binary(left, op, token, right);
        }

        Ok(left)
    }

    /// comparison → term ( (">" | ">=" | "<" | "<=") term )*
    pub(super) fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some((op, token)) = self.match_binary_op(COMPARISON_OPS) {
            let right = self.parse_term()?;
            left = Expr::binary(left, op, token, right);
        }

        Ok(left)
    }

    /// term → factor ( ("-" | "+") factor )*
    pub(super) fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some((op, token)) = self.match_binary_op(TERM_OPS) {
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, token, right);
        }

        Ok(left)
    }

    /// factor → unary ( ("/" | "*") unary )*
    pub(super) fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some((op, token)) = self.match_binary_op(FACTOR_OPS) {
            let right = self.parse_unary()?;
            left = Expr::binary(left, op, token, right);
        }

        Ok(left)
    }

    /// unary → ("!" | "-") unary | primary
    pub(super) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some((op, token)) = self.match_unary_op() {
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, token, operand));
        }

        self.parse_primary()
    }
}
