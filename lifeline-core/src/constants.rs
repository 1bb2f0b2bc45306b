/// Lifeline system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-send timeout applied to each concurrent channel delivery.
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

/// Accepted digit count for a local SMS destination.
pub const MSISDN_LOCAL_DIGITS: usize = 10;

/// Accepted digit count for an SMS destination carrying a country code.
pub const MSISDN_CC_DIGITS: usize = 12;

/// Default path of the delivery-failure audit log.
pub const DEFAULT_DELIVERY_LOG: &str = "delivery_failures.json";

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "LIFELINE_LOG";
