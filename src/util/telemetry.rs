use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());
    let _ = registry.try_init();
}
