//! # lifeline-alerts
//!
//! Owns the alert's life from creation to terminal resolution. The lifecycle
//! manager is the only component that mutates an alert's status; the service
//! facade wires ranking, dispatch, and the state machine behind the
//! client-facing operations.

pub mod lifecycle;
pub mod service;
pub mod tracing_setup;

pub use lifecycle::{transition_allowed, LifecycleManager};
pub use service::{AlertService, AlertStatusView, DispatchSummary, SosRequest, SosResponse};
