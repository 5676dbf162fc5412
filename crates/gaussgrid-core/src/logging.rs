//! Structured logging shim.
//!
//! With the `tracing` feature `trace!` is the real `tracing` macro. Without
//! it the macro expands to nothing, so call sites never need their own `cfg`.
//! Only per-point events live at this layer; spans belong to the counter.

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
