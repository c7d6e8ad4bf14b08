//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter; falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "JOTBOOK_LOG";

/// Filter used when no env var is set, by `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,jotbook=debug",
        _ => "warn,jotbook=trace",
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// A second call is a no-op.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_crate_level() {
        assert_eq!(default_directive(0), "warn");
        assert!(default_directive(1).contains("jotbook=debug"));
        assert!(default_directive(2).contains("jotbook=trace"));
        assert!(default_directive(9).contains("jotbook=trace"));
    }

    #[test]
    fn directives_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
