use std::collections::BTreeSet;

use lifeline_core::models::{Coordinate, Facility};
use lifeline_geo::{distance_km, rank};
use proptest::prelude::*;

fn coord_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(lat, lon)| Coordinate { latitude: lat, longitude: lon })
}

fn facility_at(id: usize, location: Coordinate) -> Facility {
    Facility {
        id: format!("fac-{id}"),
        name: format!("Facility {id}"),
        address: String::new(),
        primary_contact: String::new(),
        email: None,
        location,
        emergency_contacts: Vec::new(),
        operating_hours: String::new(),
        services: BTreeSet::new(),
    }
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        prop_assert!(
            (forward - backward).abs() < 1e-6,
            "asymmetric: {forward} vs {backward}"
        );
    }

    #[test]
    fn distance_to_self_is_zero(a in coord_strategy()) {
        prop_assert_eq!(distance_km(a, a), 0.0);
    }

    #[test]
    fn distance_is_never_negative(a in coord_strategy(), b in coord_strategy()) {
        prop_assert!(distance_km(a, b) >= 0.0);
    }

    #[test]
    fn rank_is_complete_and_sorted(
        origin in coord_strategy(),
        locations in proptest::collection::vec(coord_strategy(), 0..12)
    ) {
        let facilities: Vec<Facility> = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| facility_at(i, *loc))
            .collect();

        let ranked = rank(origin, &facilities).unwrap();
        prop_assert_eq!(ranked.len(), facilities.len());
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].distance_km <= pair[1].distance_km,
                "out of order: {} then {}",
                pair[0].distance_km,
                pair[1].distance_km
            );
        }
    }
}
