//! Alert lifecycle state machine and the concurrent alert store.

use dashmap::DashMap;
use uuid::Uuid;

use lifeline_core::errors::LifecycleError;
use lifeline_core::models::{AlertStatus, EmergencyAlert};

/// Whether `from` may legally move to `to`.
///
/// Terminal states admit nothing; cancellation is open until the alert is
/// resolved. Pure so the table is testable without a store.
pub fn transition_allowed(from: AlertStatus, to: AlertStatus) -> bool {
    use AlertStatus::*;
    matches!(
        (from, to),
        (Pending, Sending)
            | (Sending, Sent)
            | (Sending, Failed)
            | (Sent, Acknowledged)
            | (Acknowledged, Dispatched)
            | (Dispatched, Resolved)
            | (Sent, Cancelled)
            | (Acknowledged, Cancelled)
            | (Dispatched, Cancelled)
    )
}

/// Thread-safe owner of every alert. The sole mutator of alert status.
///
/// Alerts are retained after reaching a terminal state for audit.
pub struct LifecycleManager {
    alerts: DashMap<Uuid, EmergencyAlert>,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self {
            alerts: DashMap::new(),
        }
    }

    /// Register a freshly created alert and return its id.
    pub fn open(&self, alert: EmergencyAlert) -> Uuid {
        let id = alert.id;
        self.alerts.insert(id, alert);
        id
    }

    /// Snapshot of an alert by id.
    pub fn get(&self, id: Uuid) -> Result<EmergencyAlert, LifecycleError> {
        self.alerts
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(LifecycleError::AlertNotFound { alert_id: id })
    }

    /// Apply a status transition. An illegal transition is rejected and the
    /// alert is left unchanged.
    pub fn transition(&self, id: Uuid, to: AlertStatus) -> Result<AlertStatus, LifecycleError> {
        let mut entry = self
            .alerts
            .get_mut(&id)
            .ok_or(LifecycleError::AlertNotFound { alert_id: id })?;
        let from = entry.status;
        if !transition_allowed(from, to) {
            return Err(LifecycleError::InvalidTransition {
                alert_id: id,
                from,
                to,
            });
        }
        entry.status = to;
        tracing::info!(alert_id = %id, from = ?from, to = ?to, "lifecycle: status changed");
        Ok(to)
    }

    /// Caller-initiated cancellation.
    pub fn cancel(&self, id: Uuid) -> Result<AlertStatus, LifecycleError> {
        self.transition(id, AlertStatus::Cancelled)
    }

    /// Number of alerts held, terminal ones included.
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

impl Default for LifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeline_core::models::Coordinate;

    fn open_alert(manager: &LifecycleManager) -> Uuid {
        let coord = Coordinate::new(26.47, 73.11).unwrap();
        manager.open(EmergencyAlert::new("u-1", "Asha", coord, "", "fac-1"))
    }

    #[test]
    fn happy_path_transitions() {
        use AlertStatus::*;
        let manager = LifecycleManager::new();
        let id = open_alert(&manager);
        for status in [Sending, Sent, Acknowledged, Dispatched, Resolved] {
            manager.transition(id, status).unwrap();
        }
        assert_eq!(manager.get(id).unwrap().status, Resolved);
    }

    #[test]
    fn dispatch_failure_path() {
        use AlertStatus::*;
        let manager = LifecycleManager::new();
        let id = open_alert(&manager);
        manager.transition(id, Sending).unwrap();
        manager.transition(id, Failed).unwrap();
        // Failed is terminal: nothing moves out of it.
        assert!(manager.transition(id, Sending).is_err());
        assert!(manager.cancel(id).is_err());
        assert_eq!(manager.get(id).unwrap().status, Failed);
    }

    #[test]
    fn cancellation_allowed_until_resolved() {
        use AlertStatus::*;
        for reachable in [Sent, Acknowledged, Dispatched] {
            assert!(transition_allowed(reachable, Cancelled), "{reachable:?}");
        }
        assert!(!transition_allowed(Pending, Cancelled));
        assert!(!transition_allowed(Sending, Cancelled));
        assert!(!transition_allowed(Resolved, Cancelled));
        assert!(!transition_allowed(Failed, Cancelled));
        assert!(!transition_allowed(Cancelled, Cancelled));
    }

    #[test]
    fn cancel_on_resolved_alert_is_rejected_and_state_kept() {
        use AlertStatus::*;
        let manager = LifecycleManager::new();
        let id = open_alert(&manager);
        for status in [Sending, Sent, Acknowledged, Dispatched, Resolved] {
            manager.transition(id, status).unwrap();
        }

        let err = manager.cancel(id).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
        assert_eq!(manager.get(id).unwrap().status, Resolved);
    }

    #[test]
    fn no_skipping_states() {
        use AlertStatus::*;
        assert!(!transition_allowed(Pending, Sent));
        assert!(!transition_allowed(Sending, Acknowledged));
        assert!(!transition_allowed(Sent, Dispatched));
        assert!(!transition_allowed(Sent, Resolved));
        assert!(!transition_allowed(Acknowledged, Resolved));
    }

    #[test]
    fn unknown_alert_is_reported() {
        let manager = LifecycleManager::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            manager.get(missing),
            Err(LifecycleError::AlertNotFound { .. })
        ));
        assert!(matches!(
            manager.transition(missing, AlertStatus::Sending),
            Err(LifecycleError::AlertNotFound { .. })
        ));
    }
}
