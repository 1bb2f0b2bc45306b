//! # lifeline-core
//!
//! Foundation crate for the Lifeline emergency alert dispatch system.
//! Defines all shared types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::LifelineConfig;
pub use errors::{LifelineError, LifelineResult};
pub use models::{
    AlertStatus, ChannelKind, Coordinate, DeliveryAttempt, DeliveryResult, DispatchResult,
    EmergencyAlert, Facility, RankedFacility,
};
