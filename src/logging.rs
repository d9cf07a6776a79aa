use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber. `RUST_LOG` wins; otherwise only warnings are
/// shown unless `verbose` turns on debug output for this crate.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,ijhttp_runner=debug")
    } else {
        EnvFilter::new("warn")
    }
}
