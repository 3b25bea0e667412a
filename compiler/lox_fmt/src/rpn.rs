//! Reverse Polish notation printer.
//!
//! Operands first, operator last: `(1 + 2) * (4 - 3)` prints as
//! `1 2 + 4 3 - *`. Prefix operators are glued to their operand (`-3`),
//! and groupings keep their `(group ...)` wrapper.

use lox_ir::Expr;
use lox_stack::ensure_sufficient_stack;

use crate::literal_text;

#[derive(Default)]
pub struct RpnPrinter {
    buffer: String,
}

impl RpnPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(self) -> String {
        self.buffer
    }

    pub fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => self.buffer.push_str(&literal_text(value)),
            Expr::Grouping(inner) => {
                self.buffer.push_str("(group ");
                self.expr(inner);
                self.buffer.push(')');
            }
            Expr::Unary { op, operand, .. } => {
                self.buffer.push_str(op.as_symbol());
                self.expr(operand);
            }
            Expr::Binary {
                left, op, right, ..
            } => self.postfix(op.as_symbol(), &[&**left, &**right]),
            Expr::Sequence { head, tail } => self.postfix(",", &[&**head, &**tail]),
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => self.postfix("?:", &[&**condition, &**then_branch, &**else_branch]),
            Expr::Variable(name) => self.buffer.push_str(&name.lexeme),
        });
    }

    fn postfix(&mut self, operator: &str, operands: &[&Expr]) {
        for operand in operands {
            self.expr(operand);
            self.buffer.push(' ');
        }
        self.buffer.push_str(operator);
    }
}

/// Print an expression in reverse Polish notation.
pub fn print_rpn(expr: &Expr) -> String {
    let mut printer = RpnPrinter::new();
    printer.expr(expr);
    printer.output()
}
