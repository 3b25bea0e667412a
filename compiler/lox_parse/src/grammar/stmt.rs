//! Statement parsing.

use lox_ir::{Stmt, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// statement → varDecl | printStmt | exprStmt
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.cursor.match_any(&[TokenKind::Var]).is_some() {
            return self.parse_var_decl();
        }
        if self.cursor.match_any(&[TokenKind::Print]).is_some() {
            return self.parse_print_stmt();
        }
        self.parse_expr_stmt()
    }

    /// varDecl → "var" IDENTIFIER ( "=" expression )? ";"
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .cursor
            .consume(TokenKind::Identifier, "Expect variable name.")?
            .clone();

        let initializer = if self.cursor.match_any(&[TokenKind::Equal]).is_some() {
            Some(self.parse_expr()?)
        } else {
            None
        };

        self.cursor
            .consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// printStmt → "print" expression ";"
    fn parse_print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let value = self.parse_expr()?;
        self.cursor
            .consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// exprStmt → expression ";"
    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        self.cursor
            .consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
