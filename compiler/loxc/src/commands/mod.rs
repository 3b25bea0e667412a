//! Command handlers for the `lox` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! `read_file` live here in the module root.

mod repl;
mod run;

pub use repl::{run_prompt, run_repl};
pub use run::run_file;

/// Exit code for a source file that cannot be read.
pub const EXIT_NO_INPUT: i32 = 66;

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(EXIT_NO_INPUT);
        }
    }
}

fn read_error_message(path: &str, error: &std::io::Error) -> String {
    match error.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::read_error_message;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn read_errors_name_the_file() {
        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(read_error_message("a.lox", &missing), "cannot find file 'a.lox'");

        let binary = io::Error::from(io::ErrorKind::InvalidData);
        assert_eq!(
            read_error_message("b.lox", &binary),
            "'b.lox' contains invalid UTF-8 data"
        );
    }
}
