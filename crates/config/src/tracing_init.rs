use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for a service binary.
///
/// Filter resolution order: `RUST_LOG`, then `LOG_LEVEL`, then the supplied
/// default. Safe to call once per process.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
