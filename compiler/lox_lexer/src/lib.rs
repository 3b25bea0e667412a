//! Scanner for Lox using logos.
//!
//! `scan` turns source text into a token vector ending in exactly one `EOF`.
//! It never fails: unknown characters and unterminated literals are recorded
//! as [`ScanError`]s and the offending text is left out of the tokens.

mod raw_token;
mod scan_error;

use logos::Logos;
use lox_diagnostic::Diagnostic;
use lox_ir::{keyword, Literal, Token, TokenKind};
use tracing::debug;

use raw_token::{LineTracker, RawError, RawToken};

pub use scan_error::{ScanError, ScanErrorKind};

/// Everything one scan produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Scanner errors as diagnostics, in source order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ScanError::to_diagnostic).collect()
    }
}

/// Scan source text into tokens.
pub fn scan(source: &str) -> ScanOutput {
    let mut output = ScanOutput::default();
    let mut logos = RawToken::lexer_with_extras(source, LineTracker::default());

    while let Some(token_result) = logos.next() {
        let slice = logos.slice();
        // Callbacks may have advanced the line (multi-line strings), so read
        // it after the token is complete.
        let line = logos.extras.line;

        match token_result {
            Ok(raw) => output.tokens.extend(convert_token(raw, slice, line)),
            Err(RawError::Unrecognized) => {
                output.errors.extend(slice.chars().map(|c| {
                    ScanError::new(ScanErrorKind::UnrecognizedCharacter(c), line)
                }));
            }
            Err(RawError::UnterminatedString) => {
                output
                    .errors
                    .push(ScanError::new(ScanErrorKind::UnterminatedString, line));
            }
            Err(RawError::UnterminatedComment { opened_at }) => {
                output
                    .errors
                    .push(ScanError::new(ScanErrorKind::UnterminatedComment, opened_at));
            }
        }
    }

    output.tokens.push(Token::eof(logos.extras.line));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "scanned source"
    );
    output
}

/// Convert a raw token to a `Token`, attaching its literal payload.
///
/// Returns `None` for trivia.
fn convert_token(raw: RawToken, slice: &str, line: u32) -> Option<Token> {
    let kind = match raw {
        RawToken::Str(content) => {
            let literal = Some(Literal::Str(content));
            return Some(Token::new(TokenKind::String, slice, literal, line));
        }
        RawToken::Number(value) => {
            let literal = Some(Literal::Number(value));
            return Some(Token::new(TokenKind::Number, slice, literal, line));
        }

        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,

        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,

        RawToken::Identifier => keyword(slice).unwrap_or(TokenKind::Identifier),

        // Skipped by their callbacks.
        RawToken::Newline | RawToken::LineComment | RawToken::BlockComment => return None,
    };
    Some(Token::simple(kind, slice, line))
}
