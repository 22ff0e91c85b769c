//! Telemetry helpers for applications embedding `gantt-rs`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing` or install their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is unset: engine rejections (`warn!`) and
/// plan/width transitions (`debug!`) from this crate, warnings elsewhere.
pub const DEFAULT_TRACING_FILTER: &str = "warn,gantt_rs=debug";

/// Installs a compact `tracing` subscriber, honoring `RUST_LOG` and falling
/// back to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    let directives = std::env::var("RUST_LOG").ok();
    init_tracing_with_filter(directives.as_deref().unwrap_or(DEFAULT_TRACING_FILTER))
}

/// Installs a compact `tracing` subscriber with explicit filter directives,
/// ignoring `RUST_LOG`.
///
/// Malformed directives fall back to [`DEFAULT_TRACING_FILTER`] instead of
/// silencing the engine's warnings.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
