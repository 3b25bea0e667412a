#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use lox_diagnostic::emitter::TerminalEmitter;
use lox_eval::buffer_handler;

use super::*;

type TestSession = Session<TerminalEmitter<Vec<u8>>>;

fn session(config: RunConfig) -> (TestSession, SharedPrintHandler) {
    let output = buffer_handler();
    let session = Session::with_print_handler(config, output.clone(), TerminalEmitter::plain(Vec::new()));
    (session, output)
}

fn reported(session: &TestSession) -> String {
    String::from_utf8(session.emitter().writer().clone()).unwrap()
}

#[test]
fn exit_codes() {
    assert_eq!(RunOutcome::default().exit_code(), 0);
    assert_eq!(RunOutcome::syntax(2).exit_code(), 65);

    let (mut session, _) = session(RunConfig::default());
    let outcome = session.run("print 1 / 0;");
    assert_eq!(outcome.exit_code(), 70);
    assert!(!outcome.is_success());
}

#[test]
fn scan_stage_prints_tokens() {
    let (mut session, output) = session(RunConfig::new(Stage::Scan));
    let outcome = session.run("1 + \"a\"");
    assert!(outcome.is_success());
    assert_eq!(
        output.get_output(),
        "NUMBER 1 1\nPLUS + nil\nSTRING \"a\" a\nEOF  nil\n"
    );
}

#[test]
fn scan_stage_reports_errors_and_keeps_tokens() {
    let (mut session, output) = session(RunConfig::new(Stage::Scan));
    let outcome = session.run("1 @ 2");
    assert_eq!(outcome.syntax_errors, 1);
    assert_eq!(output.get_output(), "NUMBER 1 1\nNUMBER 2 2\nEOF  nil\n");
    assert_eq!(reported(&session), "[line 1] Error: Unrecognized character: '@'.\n");
}

#[test]
fn parse_stage_prints_statements() {
    let (mut session, output) = session(RunConfig::new(Stage::Parse));
    let outcome = session.run("var a = 1 + 2;\nprint a;");
    assert!(outcome.is_success());
    assert_eq!(output.get_output(), "(var a (+ 1 2))\n(print a)\n");
}

#[test]
fn parse_stage_expression_notations() {
    let config = RunConfig::new(Stage::Parse).with_expression(true);
    let (mut sexpr, output) = session(config);
    sexpr.run("(1 + 2) * (4 - 3)");
    assert_eq!(output.get_output(), "(* (group (+ 1 2)) (group (- 4 3)))\n");

    let (mut rpn, output) = session(config.with_notation(TreeNotation::Rpn));
    rpn.run("1 + 2 * 3");
    assert_eq!(output.get_output(), "1 2 3 * +\n");
}

#[test]
fn syntax_errors_prevent_execution() {
    let (mut session, output) = session(RunConfig::default());
    let outcome = session.run("print 1;\nprint (2;");
    assert_eq!(outcome.exit_code(), 65);
    assert_eq!(output.get_output(), "");
    assert_eq!(reported(&session), "[line 2] Error at ';': Expect ')' after expression.\n");
}

#[test]
fn scan_errors_prevent_execution() {
    let (mut session, output) = session(RunConfig::default());
    let outcome = session.run("print 1;\n\"open");
    assert_eq!(outcome.exit_code(), 65);
    assert_eq!(output.get_output(), "");
    assert_eq!(reported(&session), "[line 2] Error: Unterminated string.\n");
}

#[test]
fn recovery_mode_reports_every_bad_statement() {
    let source = "print 1 print 2; var = 3; print 4;";

    let (mut aborting, _) = session(RunConfig::default());
    assert_eq!(aborting.run(source).syntax_errors, 1);

    let (mut recovering, output) =
        session(RunConfig::default().with_recovery(RecoveryMode::Synchronize));
    let outcome = recovering.run(source);
    assert_eq!(outcome.syntax_errors, 2);
    assert_eq!(output.get_output(), "");
    assert_eq!(
        reported(&recovering),
        "[line 1] Error at 'print': Expect ';' after value.\n\
         [line 1] Error at '=': Expect variable name.\n"
    );
}

#[test]
fn runtime_error_is_reported_with_line() {
    let (mut session, output) = session(RunConfig::default());
    let outcome = session.run("print \"before\";\nprint missing;\nprint \"after\";");
    assert_eq!(outcome.exit_code(), 70);
    assert_eq!(output.get_output(), "before\n");
    assert_eq!(
        reported(&session),
        "[line 2] Error at 'missing': Undefined variable 'missing'.\n"
    );
}

#[test]
fn runs_share_one_environment() {
    let (mut session, output) = session(RunConfig::default());
    assert!(session.run("var greeting = \"hi\";").is_success());
    assert!(session.run("print greeting + \"!\";").is_success());
    assert_eq!(output.get_output(), "hi!\n");
    assert!(session.interpreter().environment().contains("greeting"));
}

#[test]
fn run_line_evaluates_bare_expressions() {
    let (mut session, output) = session(RunConfig::default());
    assert!(session.run_line("var x = 4;").is_success());
    assert!(session.run_line("x * 2").is_success());
    assert!(session.run_line("\"n\" + x").is_success());
    assert_eq!(output.get_output(), "8\nn4\n");
}

#[test]
fn run_line_reports_statement_errors() {
    let (mut session, output) = session(RunConfig::default());
    let outcome = session.run_line("print 1");
    assert_eq!(outcome.syntax_errors, 1);
    assert_eq!(output.get_output(), "");
    assert_eq!(reported(&session), "[line 1] Error at end: Expect ';' after value.\n");
}

#[test]
fn expression_mode_executes_and_prints_value() {
    let (mut session, output) = session(RunConfig::default().with_expression(true));
    assert!(session.run("true ? \"yes\" : \"no\"").is_success());
    assert_eq!(output.get_output(), "yes\n");

    let outcome = session.run("1 +");
    assert_eq!(outcome.syntax_errors, 1);
    assert_eq!(reported(&session), "[line 1] Error at end: Expected expression.\n");
}
