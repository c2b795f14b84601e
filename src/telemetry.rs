//! Telemetry helpers for applications embedding `chart-binning`.
//!
//! Bin synchronization decisions are logged through `tracing` under the
//! `chart_binning` target. Hosts either call one of the init helpers below or
//! install their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Equivalent to `init_tracing_with_directive(DEFAULT_DIRECTIVE)`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_DIRECTIVE)
}

/// Initializes a compact `tracing` subscriber, falling back to `directive` when
/// `RUST_LOG` is not set. Use `"chart_binning=trace"` to see every brush pass.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_tracing_with_directive(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
