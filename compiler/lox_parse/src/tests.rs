use super::*;
use lox_fmt::{print_expr, print_program};
use lox_ir::{BinaryOp, Expr, LiteralValue, Stmt, TokenKind};
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    let scanned = lox_lexer::scan(source);
    assert!(!scanned.has_errors(), "scan errors in {source:?}");
    scanned.tokens
}

fn expr(source: &str) -> String {
    print_expr(&parse_expression(&tokens(source)).expect("expression should parse"))
}

fn expr_error(source: &str) -> String {
    parse_expression(&tokens(source))
        .expect_err("expression should not parse")
        .to_string()
}

fn program(source: &str) -> ParseOutput {
    parse(&tokens(source))
}

fn error_lines(output: &ParseOutput) -> Vec<String> {
    output.errors.iter().map(ToString::to_string).collect()
}

// Expressions

#[test]
fn test_binary_levels_are_left_associative() {
    assert_eq!(expr("1 - 2 - 3"), "(- (- 1 2) 3)");
    assert_eq!(expr("8 / 4 / 2"), "(/ (/ 8 4) 2)");
    assert_eq!(expr("1 < 2 == 3 >= 4"), "(== (< 1 2) (>= 3 4))");
    assert_eq!(expr("a != b == c"), "(== (!= a b) c)");
}

#[test]
fn test_unary_is_right_recursive() {
    assert_eq!(expr("!!true"), "(! (! 1))");
    assert_eq!(expr("-(-3)"), "(- (group (- 3)))");
}

#[test]
fn test_ternary_is_right_associative() {
    assert_eq!(expr("a ? b : c ? d : e"), "(ternary a b (ternary c d e))");
    // The then branch is a full expression, comma included.
    assert_eq!(expr("a ? b, c : d"), "(ternary a (expr-block b c) d)");
}

#[test]
fn test_comma_binds_loosest() {
    assert_eq!(expr("a ? b : c, d"), "(expr-block (ternary a b c) d)");
    assert_eq!(expr("(1, 2)"), "(group (expr-block 1 2))");
}

#[test]
fn test_operator_tokens_are_kept() {
    let parsed = parse_expression(&tokens("1 +\n 2")).unwrap();
    match &parsed {
        Expr::Binary { op, token, .. } => {
            assert_eq!(*op, BinaryOp::Add);
            assert_eq!(token.kind, TokenKind::Plus);
            assert_eq!(token.line, 1);
        }
        other => panic!("expected binary, got {other:?}"),
    }
}

#[test]
fn test_literal_payloads() {
    assert_eq!(
        parse_expression(&tokens("\"x y\"")).unwrap(),
        Expr::literal(LiteralValue::Str("x y".into()))
    );
    assert_eq!(
        parse_expression(&tokens("12.5")).unwrap(),
        Expr::literal(LiteralValue::Number(12.5))
    );
}

// Expression errors

#[test]
fn test_expected_expression_at_end() {
    assert_eq!(expr_error("1 +"), "[line 1] Error at end: Expected expression.");
}

#[test]
fn test_expected_expression_at_token() {
    assert_eq!(expr_error("(;"), "[line 1] Error at ';': Expected expression.");
}

#[test]
fn test_missing_left_operand_at_operator() {
    assert_eq!(
        expr_error("> 3"),
        "[line 1] Error at '>': Missing left hand term for operator."
    );
    assert_eq!(
        expr_error("== 1 < 2"),
        "[line 1] Error at '==': Missing left hand term for operator."
    );
    assert_eq!(
        expr_error("* 2"),
        "[line 1] Error at '*': Missing left hand term for operator."
    );
    assert_eq!(
        expr_error("+ 2"),
        "[line 1] Error at '+': Missing left hand term for operator."
    );
}

#[test]
fn test_missing_left_operand_consumes_right_operand() {
    // `<= 1 + 2` discards `1 + 2` at term level, so the statement parser
    // then finds the `;`. Without the error production it would stop at `<=`.
    let tokens = tokens("<= 1 + 2; print 3;");
    let mut parser = Parser::new(&tokens).with_recovery(RecoveryMode::Synchronize);
    let err = parser.parse_statement().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingLeftOperand);
    assert_eq!(parser.cursor.current_kind(), TokenKind::Semicolon);
}

#[test]
fn test_unary_minus_is_not_an_error_production() {
    assert_eq!(expr("- 2"), "(- 2)");
}

#[test]
fn test_unclosed_grouping() {
    assert_eq!(expr_error("(1 + 2"), "[line 1] Error at end: Expect ')' after expression.");
}

#[test]
fn test_ternary_without_colon() {
    assert_eq!(
        expr_error("a ? b"),
        "[line 1] Error at end: Expect ':' after then branch of conditional expression."
    );
}

#[test]
fn test_expression_must_span_input() {
    assert_eq!(expr_error("1 2"), "[line 1] Error at '2': Expect end of expression.");
}

#[test]
fn test_missing_left_operand_diagnostic_code() {
    let err = parse_expression(&tokens("/ 2")).unwrap_err();
    assert_eq!(err.to_diagnostic().code, lox_diagnostic::ErrorCode::E1002);
    assert!(err.to_diagnostic().is_syntax_error());
}

// Statements

#[test]
fn test_statements_in_order() {
    let output = program("var a = 1;\nvar b;\nprint a;\na + b;");
    assert!(!output.has_errors());
    assert_eq!(
        print_program(&output.program),
        "(var a 1)\n(var b)\n(print a)\n(+ a b)"
    );
    match &output.program[1] {
        Stmt::Var { name, initializer } => {
            assert_eq!(name.lexeme, "b");
            assert_eq!(name.line, 2);
            assert!(initializer.is_none());
        }
        other => panic!("expected var, got {other:?}"),
    }
}

#[test]
fn test_empty_program() {
    let output = program("");
    assert!(output.program.is_empty());
    assert!(!output.has_errors());
}

#[test]
fn test_statement_error_messages() {
    assert_eq!(
        error_lines(&program("var 1 = 2;")),
        vec!["[line 1] Error at '1': Expect variable name."]
    );
    assert_eq!(
        error_lines(&program("var a = 1")),
        vec!["[line 1] Error at end: Expect ';' after variable declaration."]
    );
    assert_eq!(
        error_lines(&program("print 1\nprint 2;")),
        vec!["[line 2] Error at 'print': Expect ';' after value."]
    );
    assert_eq!(
        error_lines(&program("1 + 2")),
        vec!["[line 1] Error at end: Expect ';' after expression."]
    );
}

#[test]
fn test_abort_stops_at_first_error() {
    let output = program("print 1;\nprint ;\nprint 2;\nvar = 3;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(print_program(&output.program), "(print 1)");
    assert_eq!(
        error_lines(&output),
        vec!["[line 2] Error at ';': Expected expression."]
    );
}

#[test]
fn test_synchronize_reports_every_error() {
    let tokens = tokens("print 1;\nprint ;\nprint 2;\nvar = 3;\nprint 4;");
    let output = Parser::new(&tokens)
        .with_recovery(RecoveryMode::Synchronize)
        .parse_program();
    assert_eq!(
        error_lines(&output),
        vec![
            "[line 2] Error at ';': Expected expression.",
            "[line 4] Error at '=': Expect variable name.",
        ]
    );
    assert_eq!(
        print_program(&output.program),
        "(print 1)\n(print 2)\n(print 4)"
    );
}

#[test]
fn test_synchronize_resumes_at_statement_keyword() {
    let tokens = tokens("1 + ) 2 var a = 1;");
    let output = Parser::new(&tokens)
        .with_recovery(RecoveryMode::Synchronize)
        .parse_program();
    assert_eq!(output.errors.len(), 1);
    assert_eq!(print_program(&output.program), "(var a 1)");
}

#[test]
fn test_parse_output_diagnostics() {
    let output = program("print");
    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "[line 1] Error at end: Expected expression.");
}

#[test]
fn test_deep_unary_nesting() {
    let source = format!("{}1", "-".repeat(50_000));
    let parsed = parse_expression(&tokens(&source));
    assert!(parsed.is_ok());
    drop(parsed);
}

#[test]
fn test_deep_grouping_and_ternary_nesting() {
    let depth = 50_000;
    let grouped = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(parse_expression(&tokens(&grouped)).is_ok());

    let ternary = format!("{}0", "a ? 1 : ".repeat(depth));
    assert!(parse_expression(&tokens(&ternary)).is_ok());

    let output = program(&format!("print {grouped};\nprint {ternary};"));
    assert!(!output.has_errors());
    assert_eq!(output.program.len(), 2);
}
