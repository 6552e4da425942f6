//! Logging setup

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// RUST_LOG wins over `default_filter`. Output goes to stderr so printed
/// records on stdout stay clean. Calling this more than once is harmless.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
