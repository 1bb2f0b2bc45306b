//! Emergency alert record and its status values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Coordinate;

/// Lifecycle status of an emergency alert.
///
/// Status is the only mutable field of an alert; the transition rules live in
/// the lifecycle manager, which is the sole component permitted to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Pending,
    Sending,
    Sent,
    Acknowledged,
    Dispatched,
    Resolved,
    Cancelled,
    Failed,
}

impl AlertStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Resolved | Self::Cancelled)
    }
}

/// An SOS alert raised by a caller.
///
/// Retained after reaching a terminal status for audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub id: Uuid,
    pub caller_id: String,
    pub caller_name: String,
    pub location: Coordinate,
    pub message: String,
    pub facility_id: String,
    pub created_at: DateTime<Utc>,
    pub status: AlertStatus,
}

impl EmergencyAlert {
    /// Create a new alert in the `Pending` state.
    pub fn new(
        caller_id: impl Into<String>,
        caller_name: impl Into<String>,
        location: Coordinate,
        message: impl Into<String>,
        facility_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            caller_id: caller_id.into(),
            caller_name: caller_name.into(),
            location,
            message: message.into(),
            facility_id: facility_id.into(),
            created_at: Utc::now(),
            status: AlertStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_alert_starts_pending() {
        let coord = Coordinate::new(26.47, 73.11).unwrap();
        let alert = EmergencyAlert::new("u-1", "Asha", coord, "chest pain", "fac-1");
        assert_eq!(alert.status, AlertStatus::Pending);
        assert!(!alert.status.is_terminal());
    }

    #[test]
    fn terminal_states() {
        assert!(AlertStatus::Failed.is_terminal());
        assert!(AlertStatus::Resolved.is_terminal());
        assert!(AlertStatus::Cancelled.is_terminal());
        assert!(!AlertStatus::Sent.is_terminal());
        assert!(!AlertStatus::Dispatched.is_terminal());
    }
}
