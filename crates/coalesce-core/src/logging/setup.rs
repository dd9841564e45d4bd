use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;

static INIT: Once = Once::new();

/// Initialize the Coalesce tracing/logging system.
///
/// Reads `COALESCE_LOG` for per-crate log levels, e.g.
/// `COALESCE_LOG=coalesce_monitor=debug,coalesce_prediction=info`.
/// Falls back to `coalesce=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(defaults::DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// JSON-formatted variant for hosts that ship logs to a collector.
pub fn init_tracing_json(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(false))
            .with(EnvFilter::new(filter))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_safe() {
        init_tracing();
        init_tracing();
        init_tracing_json("coalesce=debug");
        tracing::info!(event = "tracing_ready", "tracing initialized");
    }
}
