use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install a global `tracing` subscriber with level controlled by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Safe to call more
/// than once per process; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
