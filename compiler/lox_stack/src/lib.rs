//! Stack guard for recursive descent and tree walking.
//!
//! Both the parser and the interpreter recurse once per nesting level of
//! the source (`((((1))))`, `!!!!x`, `-(-(-1))`). Input like that is
//! legal Lox, so instead of a depth limit we grow the stack on demand.
//!
//! On native targets this uses `stacker`; on WASM the call is direct.

/// Grow when less than this much stack remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
