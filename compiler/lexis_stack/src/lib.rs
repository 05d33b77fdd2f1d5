//! Stack growth for deeply nested programs.
//!
//! The scope builder walks the AST recursively: every nested expression,
//! pattern, or type costs a few frames. Generated code (bundles, long
//! `a + b + c + ...` chains, deeply nested object literals) can exceed the
//! default thread stack, so each recursive entry point goes through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below the red zone. WASM manages its own stack and
//! gets a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if little of it is left.
///
/// ```text
/// fn visit(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
///     ensure_sufficient_stack(|| self.visit_inner(node))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
