//! Test fixtures: a small text-processing pipeline.
//!
//! These components exist to exercise the engine in tests and examples;
//! their transformation logic stands in for arbitrary user code.

pub mod fixtures;

/// Initializes a tracing subscriber for tests, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
