//! Logging and crash reporting for the binary.
//!
//! Library code only emits `tracing` events. Installing a subscriber is left
//! to `main`, which calls [`init_tracing`] with the `-v` count.

pub mod panic_hook;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use panic_hook::{install_panic_hook, set_command};

/// Environment variable holding an `EnvFilter` directive that overrides `-v`.
pub const LOG_ENV_VAR: &str = "NAC_TCO_LOG";

/// Filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. Safe to call more than once; later calls are
/// ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(7), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(0);
        init_tracing(3);
    }
}
