#![allow(dead_code)]

use lox_diagnostic::emitter::TerminalEmitter;
use lox_eval::{buffer_handler, SharedPrintHandler};
use loxc::{RunConfig, RunOutcome, Session};

pub type TestSession = Session<TerminalEmitter<Vec<u8>>>;

/// A session writing program output and diagnostics to memory.
pub fn session(config: RunConfig) -> (TestSession, SharedPrintHandler) {
    let output = buffer_handler();
    let session = Session::with_print_handler(config, output.clone(), TerminalEmitter::plain(Vec::new()));
    (session, output)
}

/// Everything reported to the diagnostic sink so far.
pub fn reported(session: &TestSession) -> String {
    String::from_utf8_lossy(session.emitter().writer()).into_owned()
}

/// Run `source` once; returns (outcome, stdout, diagnostics).
pub fn run(config: RunConfig, source: &str) -> (RunOutcome, String, String) {
    let (mut session, output) = session(config);
    let outcome = session.run(source);
    (outcome, output.get_output(), reported(&session))
}
