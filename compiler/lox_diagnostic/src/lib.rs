//! Diagnostic system for error reporting.
//!
//! Scanner, parser and interpreter errors are all converted into a
//! [`Diagnostic`] and written through a [`emitter::DiagnosticEmitter`]:
//! - Error codes for searchability, grouped by [`Phase`]
//! - One standard line format: `[line <n>] Error<location>: <message>`
//!
//! The sink never decides anything; callers inspect the phase of what was
//! reported to choose how to proceed (and which exit status to use).

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::{ErrorCode, Phase};
