//! Dispatch counters.
//!
//! Atomics so the concurrent fan-out records without locks. Swallowed
//! delivery-log write failures are visible here and nowhere else.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for one dispatch engine.
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    sms_attempts: AtomicU64,
    sms_failures: AtomicU64,
    email_attempts: AtomicU64,
    email_failures: AtomicU64,
    log_write_failures: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_sms(&self, success: bool) {
        self.sms_attempts.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.sms_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_email(&self, success: bool) {
        self.email_attempts.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.email_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_log_write_failure(&self) {
        self.log_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DispatchMetricsSnapshot {
        DispatchMetricsSnapshot {
            sms_attempts: self.sms_attempts.load(Ordering::Relaxed),
            sms_failures: self.sms_failures.load(Ordering::Relaxed),
            email_attempts: self.email_attempts.load(Ordering::Relaxed),
            email_failures: self.email_failures.load(Ordering::Relaxed),
            log_write_failures: self.log_write_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchMetricsSnapshot {
    pub sms_attempts: u64,
    pub sms_failures: u64,
    pub email_attempts: u64,
    pub email_failures: u64,
    pub log_write_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = DispatchMetrics::new();
        metrics.record_sms(true);
        metrics.record_sms(false);
        metrics.record_email(false);
        metrics.record_log_write_failure();

        let snap = metrics.snapshot();
        assert_eq!(snap.sms_attempts, 2);
        assert_eq!(snap.sms_failures, 1);
        assert_eq!(snap.email_attempts, 1);
        assert_eq!(snap.email_failures, 1);
        assert_eq!(snap.log_write_failures, 1);
    }
}
