//! Logging setup

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Build the stderr log filter: `info`, or `debug` with `--debug`.
/// `RUST_LOG` takes precedence when set.
pub fn env_filter(debug: bool) -> EnvFilter {
    let default_level = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the stderr subscriber. Called once at startup; later calls are
/// ignored.
pub fn init(debug: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(debug)
        .with_thread_names(debug)
        .try_init();

    if result.is_ok() {
        let enabled = debug;
        tracing::debug!(debug = enabled, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_levels() {
        // Only meaningful when RUST_LOG is not set by the test runner
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter(false).to_string(), "info");
            assert_eq!(env_filter(true).to_string(), "debug");
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
