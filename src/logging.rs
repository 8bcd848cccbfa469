//! Diagnostic logging.
//!
//! Sets up `tracing` with output on stderr so it never mixes with the
//! tables and status lines printed on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "espotifai=info,warn";

/// Initialize the logging system.
///
/// The log level can be controlled via the `RUST_LOG` environment variable;
/// `verbose` raises the crate's own default level to `debug`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("espotifai=debug,warn")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    // a subscriber may already be installed (tests, embedding applications)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
