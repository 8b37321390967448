//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set. Keeps the GPU stack quiet.
pub const DEFAULT_FILTER: &str = "debug,wgpu_core=info,wgpu_hal=info,naga=info";

/// Install a global fmt subscriber.
///
/// Honours `RUST_LOG` and falls back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    init_with_filter(filter);
}

/// Install a global fmt subscriber with an explicit filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_filter(filter: impl Into<EnvFilter>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter.into())
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed, skipping logging init");
    }
}
