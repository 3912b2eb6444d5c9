//! linkdeck application module: terminal lifecycle, persistence, and the
//! runtime event loop.

/// Write-through persistence for the bookkeeping lists.
pub mod persist;
/// Runtime event loop.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
