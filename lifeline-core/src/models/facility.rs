//! Medical facility reference data.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A medical facility known to the platform.
///
/// Read-only reference data to the dispatch core; created and maintained by
/// administrative data entry elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub address: String,
    pub primary_contact: String,
    /// Destination for the email channel, when the facility has one.
    pub email: Option<String>,
    pub location: Coordinate,
    /// Phone numbers alerted over SMS, in priority order.
    pub emergency_contacts: Vec<String>,
    pub operating_hours: String,
    pub services: BTreeSet<String>,
}

/// A facility paired with its computed distance from a caller.
///
/// Derived each time ranking runs; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RankedFacility {
    pub facility: Facility,
    pub distance_km: f64,
}
