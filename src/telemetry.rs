//! Tracing bootstrap for hosts embedding `plotprep_rs`.
//!
//! Subscriber setup stays explicit and opt-in. Hosts either call
//! [`init_tracing`] (or [`init_tracing_with_filter`] for a custom default
//! directive) or wire their own `tracing` subscriber.

/// Initializes a compact `tracing` subscriber honoring `RUST_LOG`, falling
/// back to the given directive when the environment sets none.
///
/// Returns `true` when this call installed the global subscriber. Returns
/// `false` when the `telemetry` feature is disabled or another subscriber
/// was already registered by the host.
#[must_use]
pub fn init_tracing_with_filter(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}

/// [`init_tracing_with_filter`] with an `info` default directive.
#[must_use]
pub fn init_tracing() -> bool {
    init_tracing_with_filter("info")
}
