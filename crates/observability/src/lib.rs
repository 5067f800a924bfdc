//! Shared tracing setup for hosts embedding DarkEdges conditions.
//!
//! Condition crates only emit `tracing` events; nothing is recorded until a
//! host installs a subscriber through this crate.

/// Initialize process-wide tracing, filtered by `RUST_LOG` (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize process-wide tracing with explicit filter directives
/// (e.g. `"darkedges_condition=debug"`), ignoring `RUST_LOG`.
pub fn init_with_filter(directives: &str) {
    tracing::init_with_filter(directives);
}

/// Subscriber construction (filters, JSON formatting).
pub mod tracing;
