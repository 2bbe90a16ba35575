//! Log setup for the binary. Library code only emits `tracing` events.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set and valid, else `default_filter`, else `info`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Build the fmt subscriber used by the binary, writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .finish()
}

/// Install a stderr subscriber. `RUST_LOG` wins over `default_filter`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(default_filter: &str) {
    let _ = tracing::subscriber::set_global_default(subscriber(
        env_filter(default_filter),
        std::io::stderr,
    ));
}

/// Run `f` with a temporary stderr subscriber. Used before the configured
/// filter is known, e.g. while the config file itself is being loaded.
pub fn scoped<T>(default_filter: &str, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(
        subscriber(env_filter(default_filter), std::io::stderr),
        f,
    )
}
