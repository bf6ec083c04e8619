use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`. Output goes to
/// stderr so it never mixes with command output on stdout. Calling this a
/// second time is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr));

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("logging initialized");
    }
}
