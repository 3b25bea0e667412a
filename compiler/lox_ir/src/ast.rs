//! Syntax tree produced by the parser.
//!
//! The node set is closed, so consumers (printers, interpreter) match on it
//! exhaustively instead of going through a visitor. Every node owns its
//! children; trees are built once and never mutated.

use std::{fmt, mem};

use crate::{format_number, Token, TokenKind};

/// Value written directly in source: numbers, strings, `true`/`false`, `nil`.
#[derive(Clone, PartialEq, Debug)]
pub enum LiteralValue {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => f.write_str(&format_number(*n)),
            LiteralValue::Str(s) => f.write_str(s),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Nil => f.write_str("nil"),
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`
    Negate,
    /// `!`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(Self::Negate),
            TokenKind::Bang => Some(Self::Not),
            _ => None,
        }
    }
}

/// Infix operators, grouped by precedence level (tightest last).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Equality
    Equal,
    NotEqual,

    // Comparison
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Term
    Add,
    Sub,

    // Factor
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::EqualEqual => Some(Self::Equal),
            TokenKind::BangEqual => Some(Self::NotEqual),
            TokenKind::Greater => Some(Self::Greater),
            TokenKind::GreaterEqual => Some(Self::GreaterEqual),
            TokenKind::Less => Some(Self::Less),
            TokenKind::LessEqual => Some(Self::LessEqual),
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(LiteralValue),
    /// Parenthesized expression: `(inner)`
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        /// Operator token, kept for runtime diagnostics.
        token: Token,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        /// Operator token, kept for runtime diagnostics.
        token: Token,
        right: Box<Expr>,
    },
    /// Comma operator: `head, tail`. Right-associative, so `tail` may itself
    /// be a sequence.
    Sequence { head: Box<Expr>, tail: Box<Expr> },
    /// `condition ? then_branch : else_branch`. Right-associative.
    Ternary {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    /// Reference to a global variable by its name token.
    Variable(Token),
}

impl Expr {
    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, token: Token, operand: Expr) -> Self {
        Expr::Unary {
            op,
            token,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, token: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            token,
            right: Box::new(right),
        }
    }

    pub fn sequence(head: Expr, tail: Expr) -> Self {
        Expr::Sequence {
            head: Box::new(head),
            tail: Box::new(tail),
        }
    }

    pub fn ternary(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Expr::Literal(_) | Expr::Variable(_))
    }

    /// Move every non-leaf child into `out`, leaving a leaf in its place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        let mut take = |child: &mut Box<Expr>| {
            if !child.is_leaf() {
                out.push(mem::replace(&mut **child, Expr::Literal(LiteralValue::Nil)));
            }
        };
        match self {
            Expr::Literal(_) | Expr::Variable(_) => {}
            Expr::Grouping(inner) => take(inner),
            Expr::Unary { operand, .. } => take(operand),
            Expr::Binary { left, right, .. } => {
                take(left);
                take(right);
            }
            Expr::Sequence { head, tail } => {
                take(head);
                take(tail);
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                take(condition);
                take(then_branch);
                take(else_branch);
            }
        }
    }
}

/// Trees nest as deep as the source does (`((((1))))`, `1 + 1 + ... + 1`),
/// so they are torn down from a worklist instead of one stack frame per
/// level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// `var name (= initializer)? ;`
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    /// `expression ;`
    Expression(Expr),
    /// `print expression ;`
    Print(Expr),
}

/// A parsed program: statements in source (and evaluation) order.
pub type Program = Vec<Stmt>;
