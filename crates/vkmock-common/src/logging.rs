use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "VKMOCK_LOG";

/// Initialize structured logging with environment filter.
/// Set VKMOCK_LOG=debug (or trace, info, warn, error) for verbosity control.
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Logging for the driver library, which lives inside someone else's process.
///
/// Defaults to `warn` and leaves any subscriber the host already installed
/// in place. Returns whether ours was installed.
pub fn try_init_driver_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
