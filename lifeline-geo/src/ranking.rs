//! Proximity-sorted facility ranking.

use lifeline_core::errors::GeoError;
use lifeline_core::models::{Coordinate, Facility, RankedFacility};

use crate::haversine::distance_km;

/// Rank facilities by ascending distance from `origin`.
///
/// Stable: ties keep input order. Every coordinate is range-checked up front
/// so a bad record fails fast instead of sorting on NaN.
pub fn rank(origin: Coordinate, facilities: &[Facility]) -> Result<Vec<RankedFacility>, GeoError> {
    origin.validate()?;
    for facility in facilities {
        facility.location.validate()?;
    }

    let mut ranked: Vec<RankedFacility> = facilities
        .iter()
        .map(|facility| RankedFacility {
            facility: facility.clone(),
            distance_km: distance_km(origin, facility.location),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    Ok(ranked)
}

/// The closest facility to `origin`, if any are known.
pub fn nearest(
    origin: Coordinate,
    facilities: &[Facility],
) -> Result<Option<RankedFacility>, GeoError> {
    Ok(rank(origin, facilities)?.into_iter().next())
}
