use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// `RUST_LOG` wins when set (e.g. `RUST_LOG=weft_scan=trace`); otherwise
/// `verbose` turns on `debug` for every weft crate. Logs go to stderr so
/// they never mix with rendered output.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("weft=debug,weft_scan=debug,weft_subst=debug")
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
