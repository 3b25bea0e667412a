//! The interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::emitter::DiagnosticEmitter;

use crate::{RunConfig, Session};

const WELCOME: &str = "Welcome to ilox interpreter, what can I run for you today?";
const PROMPT: &str = "> ";
const FAREWELL: &str = "Bye!";

/// Run an interactive session on stdin/stdout until end of input.
pub fn run_prompt(config: RunConfig) -> i32 {
    let mut session = Session::stdio(config);
    let stdin = io::stdin();
    match run_repl(stdin.lock(), &mut io::stdout(), &mut session) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            // EX_IOERR
            74
        }
    }
}

/// Read lines from `input` and run each one in `session`.
///
/// The greeting, prompts and farewell are written to `prompt`. Each line is its own run: an error
/// is reported and the loop moves on, keeping every variable defined so
/// far.
pub fn run_repl<R, W, E>(mut input: R, prompt: &mut W, session: &mut Session<E>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: DiagnosticEmitter,
{
    writeln!(prompt, "{WELCOME}")?;
    let mut line = String::new();
    loop {
        prompt.write_all(PROMPT.as_bytes())?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt, "\n{FAREWELL}")?;
            return Ok(());
        }

        let outcome = session.run_line(line.trim_end_matches(['\n', '\r']));
        tracing::trace!(?outcome, "line finished");
    }
}
