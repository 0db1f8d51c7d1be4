use tracing_subscriber::EnvFilter;

/// Install the global JSON log subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set. Otherwise quiet mode turns logging off (the CLI
/// prints its own messages) and verbose mode logs at `info`.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "off" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests, embedding transports).
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
