//! The SOS service facade: the typed contract behind the client-facing
//! trigger, status, and cancellation endpoints.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lifeline_core::errors::{DispatchError, LifecycleError, LifelineResult};
use lifeline_core::models::{AlertStatus, Coordinate, DispatchResult, Facility};
use lifeline_dispatch::DispatchEngine;

use crate::lifecycle::LifecycleManager;

/// A user-triggered SOS.
#[derive(Debug, Clone, Deserialize)]
pub struct SosRequest {
    pub caller_id: String,
    pub caller_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text note from the caller, if any.
    #[serde(default)]
    pub message: Option<String>,
    /// Explicit facility choice; when absent the nearest facility is used.
    #[serde(default)]
    pub facility_id: Option<String>,
}

/// Outcome of an SOS trigger.
///
/// On failure `fallback_contacts` carries the facility's static emergency
/// numbers so the client can show them directly; no automated retry is
/// offered beyond a manual re-trigger.
#[derive(Debug, Clone, Serialize)]
pub struct SosResponse {
    pub id: Uuid,
    pub status: AlertStatus,
    pub fallback_contacts: Vec<String>,
}

/// Per-channel outcome counts of a completed dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchSummary {
    pub sms_success: bool,
    pub email_success: bool,
    pub attempts: usize,
    pub failures: usize,
}

impl From<&DispatchResult> for DispatchSummary {
    fn from(result: &DispatchResult) -> Self {
        Self {
            sms_success: result.sms_success,
            email_success: result.email_success,
            attempts: result.attempts.len(),
            failures: result.failure_count(),
        }
    }
}

/// Polling view of an alert.
#[derive(Debug, Clone, Serialize)]
pub struct AlertStatusView {
    pub status: AlertStatus,
    pub dispatch: Option<DispatchSummary>,
}

/// Wires ranking, the lifecycle manager, and the dispatch engine together.
pub struct AlertService {
    facilities: Vec<Facility>,
    lifecycle: LifecycleManager,
    engine: DispatchEngine,
    outcomes: DashMap<Uuid, DispatchSummary>,
}

impl AlertService {
    pub fn new(facilities: Vec<Facility>, engine: DispatchEngine) -> Self {
        Self {
            facilities,
            lifecycle: LifecycleManager::new(),
            engine,
            outcomes: DashMap::new(),
        }
    }

    /// Trigger an SOS: resolve the facility, create the alert, dispatch, and
    /// assign the definitive `Sent` or `Failed` status.
    ///
    /// Only a bad coordinate or an unresolvable facility is returned as an
    /// error; delivery failure is a normal outcome reported in the response.
    pub async fn trigger_sos(&self, request: SosRequest) -> LifelineResult<SosResponse> {
        let origin = Coordinate::new(request.latitude, request.longitude)?;
        let facility = self.resolve_facility(origin, request.facility_id.as_deref())?;

        let alert = lifeline_core::models::EmergencyAlert::new(
            request.caller_id,
            request.caller_name,
            origin,
            request.message.unwrap_or_default(),
            facility.id.clone(),
        );
        let id = self.lifecycle.open(alert);
        self.lifecycle.transition(id, AlertStatus::Sending)?;
        let alert = self.lifecycle.get(id)?;
        tracing::info!(alert_id = %id, facility = %facility.id, "sos: dispatching");

        let result = self.engine.dispatch(&alert, &facility).await;
        self.outcomes.insert(id, DispatchSummary::from(&result));

        let status = if result.overall_success() {
            self.lifecycle.transition(id, AlertStatus::Sent)?
        } else {
            self.lifecycle.transition(id, AlertStatus::Failed)?
        };

        let fallback_contacts = if result.overall_success() {
            Vec::new()
        } else {
            tracing::warn!(
                alert_id = %id,
                "sos: dispatch failed, returning static emergency numbers"
            );
            facility.emergency_contacts.clone()
        };

        Ok(SosResponse {
            id,
            status,
            fallback_contacts,
        })
    }

    /// Polling view for the client.
    pub fn status(&self, id: Uuid) -> Result<AlertStatusView, LifecycleError> {
        let alert = self.lifecycle.get(id)?;
        Ok(AlertStatusView {
            status: alert.status,
            dispatch: self.outcomes.get(&id).map(|entry| entry.clone()),
        })
    }

    /// Caller-initiated cancellation.
    pub fn cancel(&self, id: Uuid) -> Result<AlertStatus, LifecycleError> {
        self.lifecycle.cancel(id)
    }

    /// Facility operator confirmed receipt.
    pub fn acknowledge(&self, id: Uuid) -> Result<AlertStatus, LifecycleError> {
        self.lifecycle.transition(id, AlertStatus::Acknowledged)
    }

    /// Facility operator dispatched help.
    pub fn mark_dispatched(&self, id: Uuid) -> Result<AlertStatus, LifecycleError> {
        self.lifecycle.transition(id, AlertStatus::Dispatched)
    }

    /// Facility operator closed the incident.
    pub fn resolve(&self, id: Uuid) -> Result<AlertStatus, LifecycleError> {
        self.lifecycle.transition(id, AlertStatus::Resolved)
    }

    fn resolve_facility(
        &self,
        origin: Coordinate,
        explicit_id: Option<&str>,
    ) -> LifelineResult<Facility> {
        match explicit_id {
            Some(id) => self
                .facilities
                .iter()
                .find(|f| f.id == id)
                .cloned()
                .ok_or_else(|| DispatchError::UnknownFacility { id: id.to_string() }.into()),
            None => {
                let ranked = lifeline_geo::nearest(origin, &self.facilities)?;
                ranked
                    .map(|r| r.facility)
                    .ok_or_else(|| DispatchError::NoFacilities.into())
            }
        }
    }
}
