//! S-expression printer.

use lox_ir::{Expr, Stmt};
use lox_stack::ensure_sufficient_stack;

use crate::literal_text;

/// Renders trees as parenthesized prefix expressions into a buffer.
#[derive(Default)]
pub struct SExprPrinter {
    buffer: String,
}

impl SExprPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the printed output.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => self.buffer.push_str(&literal_text(value)),
            Expr::Grouping(inner) => self.parenthesize("group", &[&**inner]),
            Expr::Unary { op, operand, .. } => self.parenthesize(op.as_symbol(), &[&**operand]),
            Expr::Binary {
                left, op, right, ..
            } => self.parenthesize(op.as_symbol(), &[&**left, &**right]),
            Expr::Sequence { head, tail } => self.parenthesize("expr-block", &[&**head, &**tail]),
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => self.parenthesize("ternary", &[&**condition, &**then_branch, &**else_branch]),
            Expr::Variable(name) => self.buffer.push_str(&name.lexeme),
        });
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => self.expr(expr),
            Stmt::Print(expr) => self.parenthesize("print", &[expr]),
            Stmt::Var { name, initializer } => {
                self.buffer.push_str("(var ");
                self.buffer.push_str(&name.lexeme);
                if let Some(init) = initializer {
                    self.buffer.push(' ');
                    self.expr(init);
                }
                self.buffer.push(')');
            }
        }
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) {
        self.buffer.push('(');
        self.buffer.push_str(name);
        for expr in exprs {
            self.buffer.push(' ');
            self.expr(expr);
        }
        self.buffer.push(')');
    }
}

/// Print an expression as an S-expression.
pub fn print_expr(expr: &Expr) -> String {
    let mut printer = SExprPrinter::new();
    printer.expr(expr);
    printer.output()
}

/// Print a statement. Expression statements print their bare expression.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut printer = SExprPrinter::new();
    printer.stmt(stmt);
    printer.output()
}

/// Print a program, one statement per line.
pub fn print_program(program: &[Stmt]) -> String {
    let mut printer = SExprPrinter::new();
    for (i, stmt) in program.iter().enumerate() {
        if i > 0 {
            printer.buffer.push('\n');
        }
        printer.stmt(stmt);
    }
    printer.output()
}
