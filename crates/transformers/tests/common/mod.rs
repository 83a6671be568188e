//! Common test utilities and helpers shared by the integration tests

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Words of the lorem ipsum fixture, in order
pub const LOREM_IPSUM: [&str; 13] = [
    "Lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
];

/// Install a fmt subscriber that writes through the test harness.
///
/// Honors `RUST_LOG` and falls back to tracing every transformer call.
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lambda_transformers=trace,lambda_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
