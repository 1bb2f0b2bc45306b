//! Haversine great-circle distance.

use lifeline_core::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// Assumes both coordinates satisfy the range invariant enforced by
/// [`Coordinate::new`]; callers ranking raw input must validate first.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn jodhpur_reference_distance() {
        // Jodhpur city center to AIIMS Jodhpur, roughly 28.4 km apart.
        let origin = coord(26.4766, 73.1140);
        let facility = coord(26.2418, 73.0137);
        let d = distance_km(origin, facility);
        assert!((d - 28.4).abs() < 0.5, "got {d} km");
    }

    #[test]
    fn zero_distance_to_self() {
        let p = coord(12.9716, 77.5946);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn antipodal_points_half_circumference() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_km(a, b) - half).abs() < 1.0);
    }
}
