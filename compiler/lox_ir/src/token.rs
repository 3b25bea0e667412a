//! Token model shared by the scanner and the parser.
//!
//! A `Token` is immutable once the scanner produces it. The parser reads
//! tokens by index and never rewrites them; AST nodes keep the tokens they
//! need for diagnostics (operator position, variable names).

use std::fmt;

use crate::format_number;

/// Token kinds.
///
/// Unit-only: literal payloads live on [`Token::literal`], which keeps the
/// kind cheap to copy and compare.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Question,
    Colon,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Display name used by the token dump (`LEFT_PAREN`, `BANG_EQUAL`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Question => "QUESTION_MARK",
            Self::Colon => "COLON",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the keyword kind for an identifier spelling.
///
/// Matching is exact and case-sensitive: `Print` is an identifier.
pub fn keyword(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Typed payload of a literal token.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// A scanned token.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was scanned from.
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Create a token without a literal payload.
    pub fn simple(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self::new(kind, lexeme, None, line)
    }

    /// Create the end-of-input marker.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Token dump format: `<KIND> <lexeme> <literal-or-nil>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
mod tests;
