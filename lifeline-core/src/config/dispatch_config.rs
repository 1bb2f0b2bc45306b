//! Orchestrator tuning knobs.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIVERY_LOG, DEFAULT_SEND_TIMEOUT_SECS};

/// Dispatch engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Independent timeout applied to each concurrent send.
    pub send_timeout_secs: u64,
    /// Where the delivery-failure audit log is written.
    pub delivery_log_path: PathBuf,
}

impl DispatchConfig {
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            send_timeout_secs: DEFAULT_SEND_TIMEOUT_SECS,
            delivery_log_path: PathBuf::from(DEFAULT_DELIVERY_LOG),
        }
    }
}
