//! Operator matching helpers.

use lox_ir::{BinaryOp, Token, TokenKind, UnaryOp};

use crate::Parser;

pub(super) const EQUALITY_OPS: &[TokenKind] = &[TokenKind::BangEqual, TokenKind::EqualEqual];

pub(super) const COMPARISON_OPS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
];

pub(super) const TERM_OPS: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];

pub(super) const FACTOR_OPS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];

pub(super) const UNARY_OPS: &[TokenKind] = &[TokenKind::Bang, TokenKind::Minus];

impl Parser<'_> {
    /// Consume a binary operator from `kinds`, returning it with its token.
    pub(super) fn match_binary_op(&mut self, kinds: &[TokenKind]) -> Option<(BinaryOp, Token)> {
        let token = self.cursor.match_any(kinds)?;
        BinaryOp::from_token_kind(token.kind).map(|op| (op, token.clone()))
    }

    /// Consume a prefix operator, returning it with its token.
    pub(super) fn match_unary_op(&mut self) -> Option<(UnaryOp, Token)> {
        let token = self.cursor.match_any(UNARY_OPS)?;
        UnaryOp::from_token_kind(token.kind).map(|op| (op, token.clone()))
    }
}
