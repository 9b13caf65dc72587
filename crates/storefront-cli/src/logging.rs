//! Log subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        level.to_string()
    }
}

/// Install a fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Records from the `log`
/// facade used by the library crates are forwarded to the subscriber.
pub fn init_logging(level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level, verbose)));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_level() {
        assert_eq!(default_directive("warn", true), "debug");
        assert_eq!(default_directive("warn", false), "warn");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("info", false);
        init_logging("debug", true);
    }
}
