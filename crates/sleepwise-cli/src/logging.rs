//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Reads the `SLEEPWISE_LOG` environment variable for filter directives,
/// e.g. `SLEEPWISE_LOG=sleepwise=trace`. Falls back to `sleepwise=info`, or
/// `sleepwise=debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "sleepwise=debug"
        } else {
            "sleepwise=info"
        };
        let filter = EnvFilter::try_from_env("SLEEPWISE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
