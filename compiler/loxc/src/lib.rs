//! Lox - a tree-walking interpreter for the Lox language.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! lox_lexer::scan ──► tokens          (lox tokens)
//!     │
//!     ▼
//! lox_parse::parse ──► Program        (lox parse)
//!     │
//!     ▼
//! Interpreter::interpret ──► output   (lox run / lox repl)
//! ```
//!
//! [`Session`] drives one source text through the pipeline and reports
//! every diagnostic to one emitter. The command handlers in [`commands`]
//! turn outcomes into process exit codes.

pub mod commands;
mod session;
mod tracing_setup;

pub use session::{RunConfig, RunOutcome, Session, Stage, TreeNotation};
pub use tracing_setup::init_tracing;
