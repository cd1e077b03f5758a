//! Native stack growth for deeply nested evaluation.
//!
//! The call limit bounds recursion through functions, but a single tree can
//! still nest arbitrarily deep. `stacker` grows the stack on demand so both
//! end in a `RuntimeError` rather than a crash.

/// Grow the stack when less than this remains
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f` with at least `RED_ZONE` bytes of stack available
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
