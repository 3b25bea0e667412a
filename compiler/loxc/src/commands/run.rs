//! The `run`, `tokens` and `parse` commands: push one file through the
//! pipeline up to the configured stage.

use crate::{RunConfig, Session};

use super::read_file;

/// Run a Lox source file and return the process exit code.
///
/// Every diagnostic is reported before returning; nothing is executed if
/// scanning or parsing failed.
pub fn run_file(path: &str, config: RunConfig) -> i32 {
    let source = read_file(path);
    let mut session = Session::stdio(config);
    let outcome = session.run(&source);
    tracing::debug!(path, exit_code = outcome.exit_code(), "run finished");
    outcome.exit_code()
}
