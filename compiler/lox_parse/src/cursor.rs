//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead and consumption. The position only
//! moves forward and never passes the final `EOF`.

use lox_ir::{Token, TokenKind};

use crate::{ParseError, ParseErrorKind};

/// Stand-in for a token slice that is missing its `EOF`.
static MISSING_EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 1,
};

/// Cursor for navigating tokens.
///
/// Read-only over the scanner's output; the parser clones the tokens it
/// keeps in the tree.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must end with EOF"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Get the current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&MISSING_EOF)
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Get the most recently consumed token.
    ///
    /// Before anything is consumed this is the first token.
    pub fn previous(&self) -> &'a Token {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token,
            None => self.current(),
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    ///
    /// Always false at `EOF`, so `check(TokenKind::Eof)` never matches.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put at `EOF`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is one of `kinds`, returning it.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if kinds.iter().any(|&kind| self.check(kind)) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    pub fn consume(&mut self, kind: TokenKind, message: &'static str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::new(
                ParseErrorKind::MissingToken {
                    expected: kind,
                    message,
                },
                self.current().clone(),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens() -> Vec<Token> {
        vec![
            Token::simple(TokenKind::LeftParen, "(", 1),
            Token::simple(TokenKind::RightParen, ")", 1),
            Token::eof(1),
        ]
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let tokens = tokens();
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        let eof = cursor.advance();
        assert!(eof.is_eof());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.previous().kind, TokenKind::RightParen);
    }

    #[test]
    fn test_match_any_consumes_only_on_match() {
        let tokens = tokens();
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.match_any(&[TokenKind::Minus, TokenKind::Bang]).is_none());
        assert_eq!(cursor.position(), 0);
        let matched = cursor.match_any(&[TokenKind::Minus, TokenKind::LeftParen]);
        assert_eq!(matched.map(|t| t.kind), Some(TokenKind::LeftParen));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_consume_reports_current_token() {
        let tokens = tokens();
        let mut cursor = Cursor::new(&tokens);
        let err = cursor
            .consume(TokenKind::Semicolon, "Expect ';' after value.")
            .unwrap_err();
        assert_eq!(err.token.lexeme, "(");
        assert_eq!(err.to_string(), "[line 1] Error at '(': Expect ';' after value.");
    }

    #[test]
    fn test_check_never_matches_eof() {
        let tokens = vec![Token::eof(3)];
        let cursor = Cursor::new(&tokens);
        assert!(!cursor.check(TokenKind::Eof));
        assert!(cursor.is_at_end());
    }
}
