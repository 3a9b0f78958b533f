use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor a configured level applies.
pub const DEFAULT_LEVEL: &str = "info";

/// Initialize structured JSON logging at the default level
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Initialize JSON logging; `RUST_LOG` takes precedence over `level`
pub fn init_with_level(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .json()
        .init();
}

/// Initialize logging for tests (plain format, safe to call repeatedly)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}
