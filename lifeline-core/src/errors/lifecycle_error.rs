use uuid::Uuid;

use crate::models::AlertStatus;

/// Alert lifecycle errors. An illegal transition leaves the alert unchanged.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("invalid transition from {from:?} to {to:?} for alert {alert_id}")]
    InvalidTransition {
        alert_id: Uuid,
        from: AlertStatus,
        to: AlertStatus,
    },

    #[error("alert {alert_id} not found")]
    AlertNotFound { alert_id: Uuid },
}
