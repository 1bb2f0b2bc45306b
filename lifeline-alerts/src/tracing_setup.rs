//! Subscriber installation for the dispatch pipeline.
//!
//! Components log through `tracing` with structured fields (`alert_id`,
//! `recipient`, `facility`), so a single alert can be followed from trigger
//! through fan-in by filtering on `alert_id`. This module only installs the
//! subscriber; the call sites live in the lifecycle manager and the engine.

use tracing_subscriber::EnvFilter;

use lifeline_core::constants::LOG_FILTER_ENV;

/// Output shape of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    Json,
    /// Plain lines, for local runs and test output.
    Text,
}

/// Install the process-wide subscriber.
///
/// The filter directive is taken from the `LIFELINE_LOG` environment
/// variable; `fallback` applies when it is unset or unparsable. A second
/// call is a no-op: `try_init` loses the race and the existing subscriber
/// stays, which lets test binaries call this from every case.
pub fn install(format: LogFormat, fallback: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    let _ = installed;
}

/// JSON subscriber at `info` unless `LIFELINE_LOG` says otherwise.
pub fn install_default() {
    install(LogFormat::Json, "info");
}
