//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing after a failed
//! statement.

use lox_ir::TokenKind;

use crate::cursor::Cursor;

/// What the parser does after a statement fails to parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecoveryMode {
    /// Stop at the first error.
    #[default]
    Abort,
    /// Skip to the next statement boundary and keep parsing, so one run
    /// reports every syntax error.
    Synchronize,
}

/// A set of token kinds as a bitset, one bit per `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind as u8))
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind as u8)) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Keywords that begin a statement; parsing can resume in front of them.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Discard tokens up to the next statement boundary.
///
/// Always consumes at least one token (unless at `EOF`), then stops just
/// after a `;` or just before a token in `STMT_START`.
///
/// Returns `true` if a boundary was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>) -> bool {
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon
            || STMT_START.contains(cursor.current_kind())
        {
            return true;
        }
        cursor.advance();
    }
    false
}
