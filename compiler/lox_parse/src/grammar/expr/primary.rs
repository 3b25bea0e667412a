//! Primary expressions and error productions.

use lox_ir::{Expr, Literal, LiteralValue, Token, TokenKind};

use crate::{ParseError, Parser};

use super::operators::{COMPARISON_OPS, EQUALITY_OPS, FACTOR_OPS};

impl Parser<'_> {
    /// primary → NUMBER | STRING | "true" | "false" | "nil"
    ///         | "(" expression ")" | IDENTIFIER
    pub(super) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();

        match token.kind {
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::literal(LiteralValue::Bool(false)))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::literal(LiteralValue::Bool(true)))
            }
            TokenKind::Nil => {
                self.cursor.advance();
                Ok(Expr::literal(LiteralValue::Nil))
            }
            TokenKind::Number | TokenKind::String => {
                self.cursor.advance();
                Ok(Expr::literal(literal_value(token)))
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                Ok(Expr::Variable(token.clone()))
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor
                    .consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                Ok(Expr::grouping(inner))
            }
            _ => Err(self.parse_missing_left_operand()),
        }
    }

    /// Error production for a binary operator with no left operand
    /// (`> 3`, `* 2`).
    ///
    /// Parses and discards the right operand at the operator's own
    /// precedence level so parsing resumes after the whole malformed
    /// expression, then reports the operator. Any other token gets
    /// "Expected expression."
    fn parse_missing_left_operand(&mut self) -> ParseError {
        let operator = self.cursor.current();
        let kind = operator.kind;

        let rhs = if EQUALITY_OPS.contains(&kind) {
            self.cursor.advance();
            self.parse_comparison()
        } else if COMPARISON_OPS.contains(&kind) {
            self.cursor.advance();
            self.parse_term()
        } else if kind == TokenKind::Plus {
            self.cursor.advance();
            self.parse_factor()
        } else if FACTOR_OPS.contains(&kind) {
            self.cursor.advance();
            self.parse_unary()
        } else {
            return ParseError::expected_expression(operator);
        };

        // The right operand is only parsed to move past it; an error inside
        // it is secondary to the missing left operand.
        drop(rhs);
        ParseError::missing_left_operand(operator)
    }
}

/// Literal payload of a `NUMBER` or `STRING` token.
fn literal_value(token: &Token) -> LiteralValue {
    match &token.literal {
        Some(Literal::Number(n)) => LiteralValue::Number(*n),
        Some(Literal::Str(s)) => LiteralValue::Str(s.clone()),
        None => LiteralValue::Nil,
    }
}
