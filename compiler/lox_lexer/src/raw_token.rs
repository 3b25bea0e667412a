//! Logos token definitions and the callbacks that need to look past the
//! regex engine (string literals, nested block comments, line counting).

use logos::{FilterResult, Lexer, Logos, Skip};
use memchr::{memchr, memchr3, memchr_iter};

/// Error payload for a failed raw token.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum RawError {
    /// Nothing matched at this position.
    #[default]
    Unrecognized,
    UnterminatedString,
    /// Carries the line of the innermost `/*` that was never closed.
    UnterminatedComment { opened_at: u32 },
}

/// Lexer state threaded through the callbacks.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineTracker {
    pub line: u32,
}

impl Default for LineTracker {
    fn default() -> Self {
        LineTracker { line: 1 }
    }
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LineTracker)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[token("\n", newline)]
    Newline,

    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // Single-character punctuation
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // One or two characters
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("=")]
    Equal,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,

    // Literals
    #[token("\"", string_literal)]
    Str(String),

    // A trailing `.` without digits is left for the `Dot` token.
    #[regex(r"[0-9]+", number)]
    #[regex(r"[0-9]+\.[0-9]+", number)]
    Number(f64),

    /// Identifiers and reserved words; `lox_ir::keyword` tells them apart.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
}

fn newline(lex: &mut Lexer<'_, RawToken>) -> Skip {
    lex.extras.line += 1;
    Skip
}

fn number(lex: &mut Lexer<'_, RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn count_lines(text: &[u8]) -> u32 {
    u32::try_from(memchr_iter(b'\n', text).count()).unwrap_or(u32::MAX)
}

/// Result of looking for the closing quote of a string literal.
struct StringScan {
    /// Text between the quotes (or to end of input).
    content: String,
    /// Bytes to consume after the opening quote.
    consumed: usize,
    terminated: bool,
}

fn scan_string(rest: &str) -> StringScan {
    match memchr(b'"', rest.as_bytes()) {
        Some(end) => StringScan {
            content: rest[..end].to_owned(),
            consumed: end + 1,
            terminated: true,
        },
        None => StringScan {
            content: rest.to_owned(),
            consumed: rest.len(),
            terminated: false,
        },
    }
}

/// Strings may span lines; the token takes the line its closing quote is on.
fn string_literal(lex: &mut Lexer<'_, RawToken>) -> Result<String, RawError> {
    let scan = scan_string(lex.remainder());
    lex.extras.line += count_lines(scan.content.as_bytes());
    lex.bump(scan.consumed);
    if scan.terminated {
        Ok(scan.content)
    } else {
        Err(RawError::UnterminatedString)
    }
}

/// Result of scanning the body of a block comment.
struct CommentScan {
    /// Bytes to consume after the opening `/*`.
    consumed: usize,
    /// Line reached at the end of the scanned text.
    line: u32,
    /// Line of the innermost `/*` still open at end of input.
    unclosed: Option<u32>,
}

/// Scan a comment body, counting `/*` and `*/` pairs so nested comments
/// close only at their matching terminator.
fn scan_block_comment(body: &[u8], start_line: u32) -> CommentScan {
    let mut open = vec![start_line];
    let mut line = start_line;
    let mut pos = 0;

    while let Some(offset) = memchr3(b'*', b'/', b'\n', &body[pos..]) {
        let at = pos + offset;
        match (body[at], body.get(at + 1).copied()) {
            (b'\n', _) => {
                line += 1;
                pos = at + 1;
            }
            (b'*', Some(b'/')) => {
                open.pop();
                pos = at + 2;
                if open.is_empty() {
                    return CommentScan {
                        consumed: pos,
                        line,
                        unclosed: None,
                    };
                }
            }
            (b'/', Some(b'*')) => {
                open.push(line);
                pos = at + 2;
            }
            _ => pos = at + 1,
        }
    }

    CommentScan {
        consumed: body.len(),
        line,
        unclosed: open.last().copied(),
    }
}

fn block_comment(lex: &mut Lexer<'_, RawToken>) -> FilterResult<(), RawError> {
    let scan = scan_block_comment(lex.remainder().as_bytes(), lex.extras.line);
    lex.extras.line = scan.line;
    lex.bump(scan.consumed);
    match scan.unclosed {
        None => FilterResult::Skip,
        Some(opened_at) => FilterResult::Error(RawError::UnterminatedComment { opened_at }),
    }
}
