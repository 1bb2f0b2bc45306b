//! # lifeline-dispatch
//!
//! The notification orchestrator. Given an alert and a facility, fans out
//! concurrently across every recipient and channel, applies per-send
//! timeouts, aggregates partial results, and persists an audit record for
//! every failed attempt.

pub mod engine;
pub mod logger;
pub mod message;
pub mod metrics;

pub use engine::DispatchEngine;
pub use logger::{DeliveryLog, DeliveryLogRecord};
pub use message::AlertMessage;
pub use metrics::{DispatchMetrics, DispatchMetricsSnapshot};
