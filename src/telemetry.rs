//! Telemetry helpers for hosts embedding `line-chart-rs`.
//!
//! Frame passes log through `tracing` (`debug` for state changes such as data
//! replacement and morph preparation, `trace` for per-frame counts). Nothing
//! is emitted unless the host installs a subscriber, either its own or the
//! default one below.

/// Filter used when `RUST_LOG` is unset.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "line_chart_rs=info";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
