//! Tracing and logging setup shared by binaries and tests.

pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
