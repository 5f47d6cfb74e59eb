//! Opt-in tracing setup for hosts embedding the dashboard.
//!
//! The library itself only emits `tracing` events (dropped rows, skipped
//! charts, dataset loads). Hosts that want them printed can enable the
//! `telemetry` feature and call [`init_default_tracing`], or install their
//! own subscriber and ignore this module entirely.

/// Default filter when `RUST_LOG` is unset: this crate at `info`, quiet
/// elsewhere.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "covid_dash_rs=info";

/// Installs a compact stderr subscriber honoring `RUST_LOG`.
///
/// Returns `true` when the subscriber was installed, `false` when the
/// feature is disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
