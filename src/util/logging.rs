use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with tracing.
///
/// `RUST_LOG` takes precedence. Otherwise the `verbose` flag controls whether
/// debug logs from this crate are shown. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("bongo_overlay=debug,warn")
    } else {
        EnvFilter::new("bongo_overlay=info,warn")
    }
}
