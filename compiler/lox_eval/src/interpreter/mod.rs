//! Tree-walking interpreter for Lox programs.

mod builder;

pub use builder::InterpreterBuilder;

use tracing::trace;

use lox_ir::{Expr, Stmt};
use lox_stack::ensure_sufficient_stack;

use crate::errors::EvalResult;
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_unary;
use crate::{stdout_handler, Environment, RuntimeError, Value};

/// Executes statements against one global environment.
///
/// Bindings persist across calls to [`Interpreter::interpret`], which is how
/// a REPL session keeps its variables between lines.
pub struct Interpreter {
    environment: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter with an empty environment that prints to stdout.
    pub fn new() -> Self {
        Interpreter {
            environment: Environment::new(),
            print_handler: stdout_handler(),
        }
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute `statements` in order, stopping at the first runtime error.
    ///
    /// Statements that ran before the error keep their effects: printed
    /// output stays printed and bindings stay defined.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for (index, stmt) in statements.iter().enumerate() {
            trace!(index, kind = stmt_kind(stmt), "execute");
            self.execute(stmt)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(name.lexeme.as_str(), value);
            }
        }
        Ok(())
    }

    /// Evaluate an expression to a value.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, token, operand } => {
                let value = self.evaluate(operand)?;
                evaluate_unary(value, *op, token)
            }
            Expr::Binary {
                left,
                op,
                token,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, right, *op, token)
            }
            Expr::Sequence { head, tail } => {
                self.evaluate(head)?;
                self.evaluate(tail)
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            }
            Expr::Variable(name) => self.environment.get(name),
        }
    }
}

/// Statement kind for trace output; the tree itself can be arbitrarily deep.
fn stmt_kind(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Var { .. } => "var",
        Stmt::Expression(_) => "expression",
        Stmt::Print(_) => "print",
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
